use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::{Action, Portfolio};

/// Applies portfolio mutations as a pure state transition.
///
/// Pure business logic — no I/O, no API calls. Easy to test. Persistence of
/// the resulting state is the facade's job.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Apply one action to a portfolio, producing the next state.
    ///
    /// Validation failures (empty or duplicate ticker on Add) return an
    /// error and the caller keeps the old state; everything else succeeds,
    /// with absent-ticker deletes and updates being explicit no-ops.
    pub fn apply(&self, state: &Portfolio, action: &Action) -> Result<Portfolio, CoreError> {
        match action {
            Action::Add { ticker } => {
                let ticker = Self::normalize_ticker(ticker)?;
                if state.contains(&ticker) {
                    return Err(CoreError::DuplicateTicker(ticker));
                }
                let mut next = state.clone();
                next.holdings.push(Holding::empty(ticker));
                Ok(next)
            }
            Action::Delete { ticker } => {
                let mut next = state.clone();
                next.holdings.retain(|h| h.ticker != *ticker);
                Ok(next)
            }
            Action::UpdateAmount { ticker, raw } => {
                let amount = Self::parse_numeric(raw);
                let mut next = state.clone();
                if let Some(h) = next.holdings.iter_mut().find(|h| h.ticker == *ticker) {
                    h.amount = amount;
                }
                Ok(next)
            }
            Action::UpdatePrice { ticker, raw } => {
                let price = Self::parse_numeric(raw);
                let mut next = state.clone();
                if let Some(h) = next.holdings.iter_mut().find(|h| h.ticker == *ticker) {
                    h.price = price;
                }
                Ok(next)
            }
        }
    }

    /// Trim and uppercase a user-entered ticker; blank input is rejected.
    pub fn normalize_ticker(raw: &str) -> Result<String, CoreError> {
        let ticker = raw.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(CoreError::EmptyTicker);
        }
        Ok(ticker)
    }

    /// Parse a raw numeric field, coercing anything unusable to 0.0.
    ///
    /// Deliberate policy, not an accident: unparsable, negative, or
    /// non-finite input silently becomes zero instead of raising a
    /// validation error. Tests encode this on purpose.
    pub fn parse_numeric(raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v,
            _ => 0.0,
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
