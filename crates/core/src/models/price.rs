use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single normalized price sample (date → daily closing price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// The lifecycle of one price-history fetch.
///
/// Begins in `Loading` whenever a new (ticker, class) pair is selected and
/// resolves to exactly one of the other three states. A failure is terminal
/// for that fetch cycle; there is no retry until the selection changes.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesState {
    Loading,
    /// Normalized, ascending-by-date, NaN-filtered closing prices.
    Success(Vec<PricePoint>),
    /// The API answered but carried no usable series (unsupported symbol,
    /// rate limit note, or no parseable close in any entry).
    Empty,
    /// Network failure or malformed response body.
    Error(String),
}

impl SeriesState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SeriesState::Loading)
    }
}
