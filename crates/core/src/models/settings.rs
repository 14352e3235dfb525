use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Runtime configuration: the AlphaVantage credential, the quote market for
/// crypto series, and the seed portfolios used when no persisted snapshot
/// exists (or it fails to parse).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// AlphaVantage API key. Injected by the caller — never hard-coded in
    /// client code (the upstream app shipped one embedded; see DESIGN.md).
    pub api_key: String,

    /// Market the crypto series is quoted in (e.g., "USD").
    pub market: String,

    /// Fallback stock portfolio when the "stocks" key is absent or corrupt.
    pub stock_seed: Vec<Holding>,

    /// Fallback crypto portfolio when the "cryptos" key is absent or corrupt.
    pub crypto_seed: Vec<Holding>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            market: "USD".to_string(),
            stock_seed: vec![Holding::empty("NVDA")],
            crypto_seed: vec![Holding::empty("BTC")],
        }
    }
}

impl Settings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}
