use crate::models::holding::AssetClass;
use crate::models::price::{PricePoint, SeriesState};
use crate::providers::traits::SeriesProvider;

/// How many of the most recent points the history panel shows.
pub const DISPLAY_POINTS: usize = 10;

/// One issued price-history fetch, tagged with the generation it was
/// started under. The facade discards completions whose generation no
/// longer matches the current selection, so a slow response for a previous
/// ticker can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub symbol: String,
    pub class: AssetClass,
    pub(crate) generation: u64,
}

/// Fetches and normalizes price-history series through the provider seam.
///
/// No caching, no in-flight de-duplication, no retry: a failed fetch stays
/// failed until the selection changes and a new request is issued.
pub struct ChartService {
    provider: Box<dyn SeriesProvider>,
}

impl ChartService {
    pub fn new(provider: Box<dyn SeriesProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run one fetch to completion and fold the outcome into a state.
    ///
    /// `Ok` with points → Success, `Ok` without → Empty, `Err` → Error with
    /// a descriptive message. Never returns Loading.
    pub async fn fetch(&self, symbol: &str, class: AssetClass) -> SeriesState {
        match self.provider.daily_series(symbol, class).await {
            Ok(points) if points.is_empty() => SeriesState::Empty,
            Ok(points) => SeriesState::Success(points),
            Err(e) => {
                log::warn!("{} fetch failed for {symbol}: {e}", self.provider.name());
                SeriesState::Error(e.to_string())
            }
        }
    }
}

/// The slice of a normalized series the panel actually renders: at most the
/// last `DISPLAY_POINTS` entries (the series is ascending, so these are the
/// most recent dates).
pub fn recent_points(points: &[PricePoint]) -> &[PricePoint] {
    let start = points.len().saturating_sub(DISPLAY_POINTS);
    &points[start..]
}

/// Render one point the way the history panel shows it: `date: $price`
/// with six decimal places.
pub fn format_point(point: &PricePoint) -> String {
    format!("{}: ${:.6}", point.date, point.price)
}
