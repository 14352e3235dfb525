use serde::{Deserialize, Serialize};

/// The class of a tracked asset.
/// Determines the storage key and which AlphaVantage endpoint shape to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    /// Stocks / equities (NVDA, AAPL, etc.) — daily equity time series
    Stock,
    /// Cryptocurrencies (BTC, ETH, etc.) — daily digital-currency series
    Crypto,
}

impl AssetClass {
    /// Fixed key under which this class's portfolio snapshot is persisted.
    pub fn storage_key(&self) -> &'static str {
        match self {
            AssetClass::Stock => "stocks",
            AssetClass::Crypto => "cryptos",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Stock => write!(f, "Stock"),
            AssetClass::Crypto => write!(f, "Crypto"),
        }
    }
}

/// One portfolio line item: a ticker, how much of it is owned, and the
/// per-unit price the user entered.
///
/// The serialized field names are the persisted snapshot layout — do not
/// rename them without a storage migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "NVDA", "BTC")
    pub ticker: String,

    /// Amount of the asset owned
    pub amount: f64,

    /// Per-unit price in the display currency
    pub price: f64,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, amount: f64, price: f64) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            amount,
            price,
        }
    }

    /// A freshly added holding: zero amount, zero price.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self::new(ticker, 0.0, 0.0)
    }

    /// Market value of this line item.
    pub fn value(&self) -> f64 {
        self.amount * self.price
    }
}
