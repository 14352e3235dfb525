use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// An ordered collection of holdings. Insertion order is significant only
/// for display; the uniqueness invariant is on the (normalized) ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_holdings(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Look up a holding by its (already normalized) ticker.
    pub fn get(&self, ticker: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.ticker == ticker)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.get(ticker).is_some()
    }
}

/// A single portfolio mutation, applied through
/// [`PortfolioService::apply`](crate::services::portfolio_service::PortfolioService::apply).
///
/// The raw values on the update variants are the user's literal input;
/// parsing (and the coerce-to-zero policy) happens inside the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a new zero-valued holding for `ticker` (trimmed, uppercased).
    Add { ticker: String },
    /// Remove the holding with this ticker; absent ticker is a no-op.
    Delete { ticker: String },
    /// Replace the amount on the matching holding with the parsed raw value.
    UpdateAmount { ticker: String, raw: String },
    /// Replace the price on the matching holding with the parsed raw value.
    UpdatePrice { ticker: String, raw: String },
}
