// ═══════════════════════════════════════════════════════════════════
// Service Tests — reducer, aggregates, chart display helpers
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use stocker_core::errors::CoreError;
use stocker_core::models::holding::Holding;
use stocker_core::models::portfolio::{Action, Portfolio};
use stocker_core::models::price::PricePoint;
use stocker_core::services::analytics_service::AnalyticsService;
use stocker_core::services::chart_service::{format_point, recent_points, DISPLAY_POINTS};
use stocker_core::services::portfolio_service::PortfolioService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample() -> Portfolio {
    Portfolio::from_holdings(vec![
        Holding::new("NVDA", 2.0, 170.0),
        Holding::new("AAPL", 1.0, 240.0),
    ])
}

// ═══════════════════════════════════════════════════════════════════
// PortfolioService — Add
// ═══════════════════════════════════════════════════════════════════

mod add {
    use super::*;

    #[test]
    fn appends_one_holding() {
        let svc = PortfolioService::new();
        let before = sample();
        let after = svc
            .apply(&before, &Action::Add { ticker: "MSFT".into() })
            .unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.holdings.last().unwrap().ticker, "MSFT");
    }

    #[test]
    fn new_holding_is_zero_valued() {
        let svc = PortfolioService::new();
        let after = svc
            .apply(&Portfolio::new(), &Action::Add { ticker: "MSFT".into() })
            .unwrap();
        let h = after.get("MSFT").unwrap();
        assert_eq!(h.amount, 0.0);
        assert_eq!(h.price, 0.0);
    }

    #[test]
    fn normalizes_ticker_to_upper_case() {
        let svc = PortfolioService::new();
        let after = svc
            .apply(&Portfolio::new(), &Action::Add { ticker: "  msft ".into() })
            .unwrap();
        assert!(after.contains("MSFT"));
    }

    #[test]
    fn duplicate_ticker_is_rejected() {
        let svc = PortfolioService::new();
        let before = sample();
        let err = svc
            .apply(&before, &Action::Add { ticker: "NVDA".into() })
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTicker(t) if t == "NVDA"));
    }

    #[test]
    fn duplicate_check_applies_after_normalization() {
        let svc = PortfolioService::new();
        let before = sample();
        let err = svc
            .apply(&before, &Action::Add { ticker: " nvda ".into() })
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTicker(_)));
    }

    #[test]
    fn empty_ticker_is_rejected() {
        let svc = PortfolioService::new();
        let err = svc
            .apply(&Portfolio::new(), &Action::Add { ticker: "   ".into() })
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptyTicker));
    }

    #[test]
    fn input_state_is_never_mutated() {
        let svc = PortfolioService::new();
        let before = sample();
        let snapshot = before.clone();
        let _ = svc.apply(&before, &Action::Add { ticker: "MSFT".into() });
        assert_eq!(before, snapshot);
    }
}

// ═══════════════════════════════════════════════════════════════════
// PortfolioService — Delete
// ═══════════════════════════════════════════════════════════════════

mod delete {
    use super::*;

    #[test]
    fn removes_exactly_the_matching_entry() {
        let svc = PortfolioService::new();
        let after = svc
            .apply(&sample(), &Action::Delete { ticker: "NVDA".into() })
            .unwrap();
        assert_eq!(after.len(), 1);
        assert!(!after.contains("NVDA"));
        assert!(after.contains("AAPL"));
    }

    #[test]
    fn absent_ticker_is_a_noop() {
        let svc = PortfolioService::new();
        let before = sample();
        let after = svc
            .apply(&before, &Action::Delete { ticker: "MSFT".into() })
            .unwrap();
        assert_eq!(after, before);
    }
}

// ═══════════════════════════════════════════════════════════════════
// PortfolioService — Updates & Coercion
// ═══════════════════════════════════════════════════════════════════

mod update {
    use super::*;

    #[test]
    fn update_amount_replaces_field() {
        let svc = PortfolioService::new();
        let after = svc
            .apply(
                &sample(),
                &Action::UpdateAmount { ticker: "NVDA".into(), raw: "3.5".into() },
            )
            .unwrap();
        assert_eq!(after.get("NVDA").unwrap().amount, 3.5);
        // price untouched
        assert_eq!(after.get("NVDA").unwrap().price, 170.0);
    }

    #[test]
    fn update_price_replaces_field() {
        let svc = PortfolioService::new();
        let after = svc
            .apply(
                &sample(),
                &Action::UpdatePrice { ticker: "AAPL".into(), raw: "250".into() },
            )
            .unwrap();
        assert_eq!(after.get("AAPL").unwrap().price, 250.0);
        assert_eq!(after.get("AAPL").unwrap().amount, 1.0);
    }

    #[test]
    fn unparsable_amount_coerces_to_zero_without_error() {
        let svc = PortfolioService::new();
        let after = svc
            .apply(
                &sample(),
                &Action::UpdateAmount { ticker: "NVDA".into(), raw: "abc".into() },
            )
            .unwrap();
        assert_eq!(after.get("NVDA").unwrap().amount, 0.0);
    }

    #[test]
    fn absent_ticker_update_is_a_noop() {
        let svc = PortfolioService::new();
        let before = sample();
        let after = svc
            .apply(
                &before,
                &Action::UpdateAmount { ticker: "MSFT".into(), raw: "5".into() },
            )
            .unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn parse_numeric_coercion_policy() {
        // Deliberate: anything unusable becomes 0.0, never an error.
        assert_eq!(PortfolioService::parse_numeric("abc"), 0.0);
        assert_eq!(PortfolioService::parse_numeric(""), 0.0);
        assert_eq!(PortfolioService::parse_numeric("-3"), 0.0);
        assert_eq!(PortfolioService::parse_numeric("NaN"), 0.0);
        assert_eq!(PortfolioService::parse_numeric("inf"), 0.0);
        assert_eq!(PortfolioService::parse_numeric("2.5"), 2.5);
        assert_eq!(PortfolioService::parse_numeric(" 7 "), 7.0);
        assert_eq!(PortfolioService::parse_numeric("0"), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// AnalyticsService
// ═══════════════════════════════════════════════════════════════════

mod analytics {
    use super::*;

    #[test]
    fn total_value_sums_amount_times_price() {
        let svc = AnalyticsService::new();
        // 2 × 170 + 1 × 240 = 580
        assert_eq!(svc.total_value(&sample()), 580.0);
    }

    #[test]
    fn total_value_of_empty_portfolio_is_zero() {
        let svc = AnalyticsService::new();
        assert_eq!(svc.total_value(&Portfolio::new()), 0.0);
    }

    #[test]
    fn total_amount_sums_amounts() {
        let svc = AnalyticsService::new();
        assert_eq!(svc.total_amount(&sample()), 3.0);
    }

    #[test]
    fn total_amount_of_empty_portfolio_is_zero() {
        let svc = AnalyticsService::new();
        assert_eq!(svc.total_amount(&Portfolio::new()), 0.0);
    }

    #[test]
    fn zero_priced_holdings_contribute_nothing_to_value() {
        let svc = AnalyticsService::new();
        let p = Portfolio::from_holdings(vec![
            Holding::new("NVDA", 5.0, 0.0),
            Holding::new("AAPL", 1.0, 240.0),
        ]);
        assert_eq!(svc.total_value(&p), 240.0);
        assert_eq!(svc.total_amount(&p), 6.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Chart display helpers
// ═══════════════════════════════════════════════════════════════════

mod display {
    use super::*;

    fn series(n: usize) -> Vec<PricePoint> {
        (0..n)
            .map(|i| PricePoint {
                date: d(2024, 1, 1) + chrono::Days::new(i as u64),
                price: 100.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn recent_points_caps_at_ten() {
        let points = series(30);
        let shown = recent_points(&points);
        assert_eq!(shown.len(), DISPLAY_POINTS);
        // the most recent dates, still ascending
        assert_eq!(shown.first().unwrap().date, d(2024, 1, 21));
        assert_eq!(shown.last().unwrap().date, d(2024, 1, 30));
    }

    #[test]
    fn recent_points_of_short_series_is_the_whole_series() {
        let points = series(3);
        assert_eq!(recent_points(&points).len(), 3);
    }

    #[test]
    fn recent_points_of_empty_series_is_empty() {
        assert!(recent_points(&[]).is_empty());
    }

    #[test]
    fn format_point_uses_six_decimal_places() {
        let p = PricePoint { date: d(2024, 1, 3), price: 105.0 };
        assert_eq!(format_point(&p), "2024-01-03: $105.000000");
    }

    #[test]
    fn format_point_keeps_sub_cent_precision() {
        let p = PricePoint { date: d(2024, 1, 3), price: 0.1234567 };
        assert_eq!(format_point(&p), "2024-01-03: $0.123457");
    }
}
