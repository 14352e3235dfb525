use crate::models::portfolio::Portfolio;

/// Derives aggregate figures from a portfolio.
///
/// Recomputed from scratch on every call — the collections are small enough
/// that caching would only add staleness bugs.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Total market value: Σ amount × price. Empty portfolio yields 0.
    pub fn total_value(&self, portfolio: &Portfolio) -> f64 {
        portfolio.holdings.iter().map(|h| h.value()).sum()
    }

    /// Total units held across all holdings: Σ amount.
    pub fn total_amount(&self, portfolio: &Portfolio) -> f64 {
        portfolio.holdings.iter().map(|h| h.amount).sum()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
