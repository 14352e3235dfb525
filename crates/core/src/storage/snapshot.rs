use super::kv::KeyValueStore;
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// Snapshot codec for the persisted portfolio layout: a JSON array of
/// `{ "ticker", "amount", "price" }` objects under a fixed store key.

/// Serialize a portfolio to snapshot bytes.
pub fn encode(portfolio: &Portfolio) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(&portfolio.holdings)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
}

/// Deserialize snapshot bytes back into a portfolio.
pub fn decode(bytes: &[u8]) -> Result<Portfolio, CoreError> {
    let holdings: Vec<Holding> = serde_json::from_slice(bytes)?;
    Ok(Portfolio::from_holdings(holdings))
}

/// Load the portfolio stored under `key`, falling back to `seed` when the
/// key is absent or its bytes fail to parse. Corruption is recovered
/// locally (logged, never surfaced) — worst case the user starts from the
/// seed again.
pub fn load_or_seed(
    store: &dyn KeyValueStore,
    key: &str,
    seed: &[Holding],
) -> Result<Portfolio, CoreError> {
    match store.get(key)? {
        Some(bytes) => match decode(&bytes) {
            Ok(portfolio) => Ok(portfolio),
            Err(e) => {
                log::warn!("Corrupt snapshot under '{key}' ({e}); falling back to seed");
                Ok(Portfolio::from_holdings(seed.to_vec()))
            }
        },
        None => Ok(Portfolio::from_holdings(seed.to_vec())),
    }
}

/// Persist a portfolio under `key`.
pub fn save(
    store: &mut dyn KeyValueStore,
    key: &str,
    portfolio: &Portfolio,
) -> Result<(), CoreError> {
    let bytes = encode(portfolio)?;
    store.set(key, &bytes)
}
