use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::holding::AssetClass;
use crate::models::price::PricePoint;

/// Trait abstraction for the price-history data source.
///
/// The dashboard only ever talks to this seam, so tests can drop in a mock
/// and the AlphaVantage implementation can be swapped out without touching
/// the rest of the codebase.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the daily closing-price series for a symbol.
    ///
    /// Returns points sorted ascending by date. An answer that carries no
    /// usable series (missing envelope, no parseable close) is `Ok(vec![])`;
    /// `Err` is reserved for network failures and malformed bodies.
    async fn daily_series(
        &self,
        symbol: &str,
        class: AssetClass,
    ) -> Result<Vec<PricePoint>, CoreError>;
}
