use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::SeriesProvider;
use crate::errors::CoreError;
use crate::models::holding::AssetClass;
use crate::models::price::PricePoint;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// AlphaVantage API provider for daily closing-price series.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints). A rate-limited
///   response still returns HTTP 200 but drops the time-series envelope,
///   which surfaces as an empty series here.
/// - **Requires**: API key.
/// - **Endpoints**: `TIME_SERIES_DAILY` for equities,
///   `DIGITAL_CURRENCY_DAILY` for crypto (quoted in `market`).
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    market: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String, market: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            market,
        }
    }
}

// ── AlphaVantage API response types ─────────────────────────────────

#[derive(Deserialize)]
struct StockSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, StockDay>>,
}

#[derive(Deserialize)]
struct StockDay {
    #[serde(rename = "4. close")]
    close: Option<String>,
}

#[derive(Deserialize)]
struct CryptoSeriesResponse {
    #[serde(rename = "Time Series (Digital Currency Daily)")]
    time_series: Option<HashMap<String, CryptoDay>>,
}

#[derive(Deserialize)]
struct CryptoDay {
    #[serde(rename = "4a. close (USD)")]
    close: Option<String>,
}

/// Normalize a raw AlphaVantage response body into ascending PricePoints.
///
/// The source returns the series as a date-keyed object (newest first when
/// iterated in document order); entries with an unparseable date or close
/// are dropped rather than failing the whole series. A missing envelope key
/// (unsupported symbol, rate limit note) yields an empty Vec, not an error.
pub fn parse_series(class: AssetClass, body: &str) -> Result<Vec<PricePoint>, CoreError> {
    let raw: HashMap<String, Option<String>> = match class {
        AssetClass::Stock => {
            let resp: StockSeriesResponse = serde_json::from_str(body)?;
            match resp.time_series {
                Some(series) => series.into_iter().map(|(d, v)| (d, v.close)).collect(),
                None => return Ok(Vec::new()),
            }
        }
        AssetClass::Crypto => {
            let resp: CryptoSeriesResponse = serde_json::from_str(body)?;
            match resp.time_series {
                Some(series) => series.into_iter().map(|(d, v)| (d, v.close)).collect(),
                None => return Ok(Vec::new()),
            }
        }
    };

    let mut points: Vec<PricePoint> = raw
        .into_iter()
        .filter_map(|(date_str, close)| {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").ok()?;
            let price: f64 = close?.parse().ok()?;
            if !price.is_finite() {
                return None;
            }
            Some(PricePoint { date, price })
        })
        .collect();

    points.sort_by_key(|p| p.date);
    Ok(points)
}

#[async_trait]
impl SeriesProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "AlphaVantage"
    }

    async fn daily_series(
        &self,
        symbol: &str,
        class: AssetClass,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let symbol = symbol.to_uppercase();
        let mut query: Vec<(&str, &str)> = match class {
            AssetClass::Stock => vec![("function", "TIME_SERIES_DAILY")],
            AssetClass::Crypto => vec![
                ("function", "DIGITAL_CURRENCY_DAILY"),
                ("market", self.market.as_str()),
            ],
        };
        query.push(("symbol", &symbol));
        query.push(("apikey", &self.api_key));

        let body = self
            .client
            .get(BASE_URL)
            .query(&query)
            .send()
            .await?
            .text()
            .await?;

        let points = parse_series(class, &body).map_err(|e| CoreError::Api {
            provider: "AlphaVantage".into(),
            message: format!("Failed to parse {class} series for {symbol}: {e}"),
        })?;

        if points.is_empty() {
            log::warn!("AlphaVantage returned no usable series for {symbol} ({class})");
        }
        Ok(points)
    }
}
