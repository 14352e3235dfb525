pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    holding::AssetClass,
    portfolio::{Action, Portfolio},
    price::SeriesState,
    settings::Settings,
};
use providers::alphavantage::AlphaVantageProvider;
use providers::traits::SeriesProvider;
use services::{
    analytics_service::AnalyticsService,
    chart_service::{ChartService, SeriesRequest},
    portfolio_service::PortfolioService,
};
use storage::kv::KeyValueStore;
use storage::snapshot;

use errors::CoreError;

/// Main entry point for the Stocker core library.
///
/// Owns the two portfolios (stocks and cryptos), the injected key-value
/// store they are persisted into, the current ticker selection, and the
/// services needed to operate on all of it. Every successful mutation
/// writes a full snapshot back to the store under the class's fixed key.
#[must_use]
pub struct Stocker {
    stocks: Portfolio,
    cryptos: Portfolio,
    store: Box<dyn KeyValueStore>,
    settings: Settings,
    portfolio_service: PortfolioService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
    /// Current history-panel selection, shared across both portfolios.
    selected: Option<(String, AssetClass)>,
    series: SeriesState,
    /// Bumped on every selection change; stale fetch completions are
    /// discarded by comparing against it.
    generation: u64,
}

impl std::fmt::Debug for Stocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stocker")
            .field("stocks", &self.stocks.len())
            .field("cryptos", &self.cryptos.len())
            .field("selected", &self.selected)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Stocker {
    /// Open a dashboard backed by `store`, talking to AlphaVantage with the
    /// credential from `settings`. Both portfolios are loaded from their
    /// snapshot keys, falling back to the seeds on absence or corruption.
    pub fn open(store: Box<dyn KeyValueStore>, settings: Settings) -> Result<Self, CoreError> {
        let provider = AlphaVantageProvider::new(settings.api_key.clone(), settings.market.clone());
        Self::with_provider(store, settings, Box::new(provider))
    }

    /// Open with an explicit series provider (tests inject a mock here).
    pub fn with_provider(
        store: Box<dyn KeyValueStore>,
        settings: Settings,
        provider: Box<dyn SeriesProvider>,
    ) -> Result<Self, CoreError> {
        let stocks = snapshot::load_or_seed(
            store.as_ref(),
            AssetClass::Stock.storage_key(),
            &settings.stock_seed,
        )?;
        let cryptos = snapshot::load_or_seed(
            store.as_ref(),
            AssetClass::Crypto.storage_key(),
            &settings.crypto_seed,
        )?;

        Ok(Self {
            stocks,
            cryptos,
            store,
            settings,
            portfolio_service: PortfolioService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(provider),
            selected: None,
            series: SeriesState::Loading,
            generation: 0,
        })
    }

    // ── Portfolio Mutations ─────────────────────────────────────────

    /// Add a new zero-valued holding. Fails on empty or duplicate ticker;
    /// the caller surfaces the error (the original app alert()ed it) and
    /// the portfolio is left untouched.
    pub fn add(&mut self, class: AssetClass, raw_ticker: &str) -> Result<(), CoreError> {
        self.dispatch(
            class,
            Action::Add {
                ticker: raw_ticker.to_string(),
            },
        )
    }

    /// Remove the holding with this ticker; absent ticker is a no-op.
    pub fn delete(&mut self, class: AssetClass, ticker: &str) -> Result<(), CoreError> {
        self.dispatch(
            class,
            Action::Delete {
                ticker: ticker.to_string(),
            },
        )
    }

    /// Replace the amount on a holding, coercing unparsable input to 0.
    pub fn update_amount(
        &mut self,
        class: AssetClass,
        ticker: &str,
        raw: &str,
    ) -> Result<(), CoreError> {
        self.dispatch(
            class,
            Action::UpdateAmount {
                ticker: ticker.to_string(),
                raw: raw.to_string(),
            },
        )
    }

    /// Replace the price on a holding, coercing unparsable input to 0.
    pub fn update_price(
        &mut self,
        class: AssetClass,
        ticker: &str,
        raw: &str,
    ) -> Result<(), CoreError> {
        self.dispatch(
            class,
            Action::UpdatePrice {
                ticker: ticker.to_string(),
                raw: raw.to_string(),
            },
        )
    }

    /// Run one action through the reducer and persist the result. The new
    /// state is committed only after the snapshot write succeeds.
    pub fn dispatch(&mut self, class: AssetClass, action: Action) -> Result<(), CoreError> {
        let next = self.portfolio_service.apply(self.portfolio(class), &action)?;
        let bytes = snapshot::encode(&next)?;
        self.store.set(class.storage_key(), &bytes)?;
        *self.portfolio_mut(class) = next;
        Ok(())
    }

    // ── Accessors & Aggregates ──────────────────────────────────────

    #[must_use]
    pub fn portfolio(&self, class: AssetClass) -> &Portfolio {
        match class {
            AssetClass::Stock => &self.stocks,
            AssetClass::Crypto => &self.cryptos,
        }
    }

    /// Total market value of one portfolio: Σ amount × price.
    #[must_use]
    pub fn total_value(&self, class: AssetClass) -> f64 {
        self.analytics_service.total_value(self.portfolio(class))
    }

    /// Total units held in one portfolio: Σ amount.
    #[must_use]
    pub fn total_amount(&self, class: AssetClass) -> f64 {
        self.analytics_service.total_amount(self.portfolio(class))
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Price History Selection ─────────────────────────────────────

    /// Replace the current selection. Selecting a ticker resets the panel
    /// to Loading and returns the request to run; selecting `None` clears
    /// the panel. Either way the generation advances, so any fetch still in
    /// flight for the previous selection will be discarded on completion.
    pub fn select(&mut self, selection: Option<(String, AssetClass)>) -> Option<SeriesRequest> {
        self.generation += 1;
        self.series = SeriesState::Loading;
        self.selected = selection;
        self.selected
            .as_ref()
            .map(|(symbol, class)| SeriesRequest {
                symbol: symbol.clone(),
                class: *class,
                generation: self.generation,
            })
    }

    #[must_use]
    pub fn selected(&self) -> Option<&(String, AssetClass)> {
        self.selected.as_ref()
    }

    /// State of the history panel for the current selection, or `None`
    /// when nothing is selected.
    #[must_use]
    pub fn series(&self) -> Option<&SeriesState> {
        self.selected.as_ref().map(|_| &self.series)
    }

    /// Run an issued request against the provider. Does not touch the panel
    /// state — pass the outcome to [`complete`](Self::complete).
    pub async fn fetch_series(&self, request: &SeriesRequest) -> SeriesState {
        self.chart_service.fetch(&request.symbol, request.class).await
    }

    /// Fold a finished fetch into the panel state. Returns `false` (and
    /// changes nothing) when the request is stale, i.e. the selection moved
    /// on while the fetch was in flight.
    pub fn complete(&mut self, request: SeriesRequest, state: SeriesState) -> bool {
        if request.generation != self.generation {
            log::debug!("Discarding stale series result for {}", request.symbol);
            return false;
        }
        self.series = state;
        true
    }

    /// Select a ticker and drive the fetch to completion in one call.
    /// Convenience for sequential callers (the CLI); interactive frontends
    /// use the select/fetch/complete triple directly.
    pub async fn select_and_fetch(&mut self, ticker: &str, class: AssetClass) -> &SeriesState {
        // select() always returns a request for a Some selection
        if let Some(request) = self.select(Some((ticker.to_uppercase(), class))) {
            let state = self.fetch_series(&request).await;
            self.complete(request, state);
        }
        &self.series
    }

    // ── Internal ────────────────────────────────────────────────────

    fn portfolio_mut(&mut self, class: AssetClass) -> &mut Portfolio {
        match class {
            AssetClass::Stock => &mut self.stocks,
            AssetClass::Crypto => &mut self.cryptos,
        }
    }
}
