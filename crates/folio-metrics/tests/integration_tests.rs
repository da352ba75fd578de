//! Integration tests for folio-metrics.
//!
//! These tests drive the public API end to end with realistic portfolios
//! and the edge cases a display layer must be able to render.

use approx::assert_relative_eq;
use folio_metrics::prelude::*;
use folio_metrics::sample_portfolio;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn asset(symbol: &str, shares: Decimal, purchase: Decimal, current: Decimal) -> Asset {
    Asset::builder()
        .symbol(symbol)
        .shares(shares)
        .purchase_price(purchase)
        .current_price(current)
        .build()
        .unwrap()
}

/// A diversified portfolio with gains, losses and one flat position.
fn create_mixed_portfolio() -> Portfolio {
    Portfolio::new("Mixed").with_assets(vec![
        asset("NVDA", dec!(20), dec!(420.00), dec!(880.25)),
        asset("INTC", dec!(100), dec!(45.10), dec!(31.70)),
        asset("KO", dec!(50), dec!(58.00), dec!(58.00)),
        asset("JPM", dec!(12.5), dec!(140.40), dec!(198.12)),
        asset("PFE", dec!(80), dec!(39.95), dec!(28.44)),
    ])
}

fn metrics_for(assets: &[Asset]) -> PortfolioMetrics {
    calculate_portfolio_metrics(assets, &MetricsConfig::default())
        .into_metrics()
        .expect("expected computed metrics")
}

// =============================================================================
// REALISTIC PORTFOLIOS
// =============================================================================

#[test]
fn test_sample_portfolio_end_to_end() {
    let portfolio = sample_portfolio();
    let metrics = portfolio
        .metrics(&MetricsConfig::default())
        .into_metrics()
        .unwrap();

    assert_eq!(metrics.total_value.to_string(), "20705.00");
    assert_eq!(metrics.total_cost.to_string(), "20000.00");
    assert_eq!(metrics.total_gain_loss.to_string(), "705.00");
    assert_relative_eq!(metrics.percentage_return.unwrap(), 3.525, epsilon = 1e-9);
    assert_eq!(metrics.best_performer.as_deref(), Some("MSFT"));
    assert_eq!(metrics.worst_performer.as_deref(), Some("GOOGL"));
    assert_eq!(metrics.asset_count(), 3);
    assert!(metrics.is_complete());
}

#[test]
fn test_mixed_portfolio() {
    let portfolio = create_mixed_portfolio();
    let metrics = metrics_for(&portfolio.assets);

    // Every cost is non-zero and returns differ: all fields defined and finite
    assert!(metrics.is_complete());
    for value in [
        metrics.percentage_return,
        metrics.average_return,
        metrics.sharpe_ratio,
    ] {
        assert!(value.unwrap().is_finite());
    }

    // NVDA: (880.25 - 420) / 420 = +109.58%
    assert_eq!(metrics.best_performer.as_deref(), Some("NVDA"));
    // INTC: -29.71%, PFE: -28.81%
    assert_eq!(metrics.worst_performer.as_deref(), Some("INTC"));

    let ko = metrics.performance("KO").unwrap();
    assert_eq!(ko.return_pct, Some(0.0));
    assert_eq!(ko.gain_loss, Decimal::ZERO);

    // JPM: 12.5 × 198.12 = 2476.50
    assert_eq!(metrics.performance("JPM").unwrap().market_value, dec!(2476.50));
}

#[test]
fn test_totals_match_breakdown_for_whole_cent_inputs() {
    let portfolio = create_mixed_portfolio();
    let metrics = metrics_for(&portfolio.assets);

    let value: Decimal = metrics.assets.iter().map(|a| a.market_value).sum();
    let cost: Decimal = metrics.assets.iter().map(|a| a.cost_basis).sum();

    assert_eq!(metrics.total_value, value);
    assert_eq!(metrics.total_cost, cost);
    assert_eq!(metrics.total_gain_loss, value - cost);
}

// =============================================================================
// EDGE CASES
// =============================================================================

#[test]
fn test_empty_portfolio_is_no_data() {
    let report = Portfolio::new("Empty").metrics(&MetricsConfig::default());
    assert_eq!(report, MetricsReport::NoData);
}

#[test]
fn test_donated_shares() {
    let metrics = metrics_for(&[asset("X", dec!(10), Decimal::ZERO, dec!(100))]);

    assert!(metrics.assets[0].return_pct.is_none());
    assert!(metrics.average_return.is_none());
    assert_eq!(metrics.total_value, dec!(1000));
    assert_eq!(metrics.total_cost, Decimal::ZERO);
    assert!(metrics.percentage_return.is_none());
    assert!(metrics.sharpe_ratio.is_none());
    assert!(metrics.best_performer.is_none());
    assert!(metrics.worst_performer.is_none());
    assert_eq!(metrics.returns_count(), 0);
}

#[test]
fn test_flat_portfolio_tie_break() {
    let metrics = metrics_for(&[
        asset("A", dec!(1), dec!(100), dec!(100)),
        asset("B", dec!(1), dec!(100), dec!(100)),
    ]);

    assert_eq!(metrics.assets[0].return_pct, Some(0.0));
    assert_eq!(metrics.assets[1].return_pct, Some(0.0));
    assert!(metrics.sharpe_ratio.is_none());
    assert_eq!(metrics.best_performer.as_deref(), Some("A"));
    assert_eq!(metrics.worst_performer.as_deref(), Some("A"));
}

#[test]
fn test_equal_returns_with_different_sizes() {
    // Both +10% although positions differ: still zero variance
    let metrics = metrics_for(&[
        asset("SMALL", dec!(1), dec!(10), dec!(11)),
        asset("LARGE", dec!(1000), dec!(50), dec!(55)),
    ]);

    assert!(metrics.sharpe_ratio.is_none());
    assert_relative_eq!(metrics.average_return.unwrap(), 10.0, epsilon = 1e-12);
}

#[test]
fn test_single_defined_return_among_gifts() {
    let metrics = metrics_for(&[
        asset("GIFT1", dec!(5), Decimal::ZERO, dec!(10)),
        asset("REAL", dec!(2), dec!(50), dec!(40)),
        asset("GIFT2", dec!(5), Decimal::ZERO, dec!(10)),
    ]);

    assert_relative_eq!(metrics.average_return.unwrap(), -20.0, epsilon = 1e-12);
    assert!(metrics.sharpe_ratio.is_none());
    assert_eq!(metrics.best_performer.as_deref(), Some("REAL"));
    assert_eq!(metrics.worst_performer.as_deref(), Some("REAL"));
}

#[test]
fn test_tiny_and_huge_values() {
    let metrics = metrics_for(&[
        asset("PENNY", dec!(0.000001), dec!(0.0001), dec!(0.0002)),
        asset("WHALE", dec!(1_000_000_000), dec!(1_000_000), dec!(1_000_001)),
    ]);

    assert_eq!(metrics.total_value, dec!(1_000_001_000_000_000.00));
    assert_eq!(metrics.total_cost, dec!(1_000_000_000_000_000.00));
    assert_relative_eq!(metrics.assets[0].return_pct.unwrap(), 100.0, epsilon = 1e-9);
    assert!(metrics.sharpe_ratio.unwrap().is_finite());
}

#[test]
fn test_long_only_validation_before_calculation() {
    let assets = vec![
        asset("LONG", dec!(10), dec!(10), dec!(12)),
        asset("SHORT", dec!(-10), dec!(10), dec!(8)),
    ];

    assert!(validate_assets(&assets, InputPolicy::LongOnly).is_err());
    assert!(validate_assets(&assets, InputPolicy::Signed).is_ok());

    // The calculator itself accepts the signed input
    assert!(calculate_portfolio_metrics(&assets, &MetricsConfig::default())
        .metrics()
        .is_some());
}

#[test]
fn test_half_even_rounding_config() {
    let assets = [asset("MID", dec!(1), dec!(0.125), dec!(0.125))];

    let half_up = calculate_portfolio_metrics(&assets, &MetricsConfig::default())
        .into_metrics()
        .unwrap();
    assert_eq!(half_up.total_value, dec!(0.13));

    let config = MetricsConfig::default().with_rounding(MoneyRounding::HalfEven);
    let half_even = calculate_portfolio_metrics(&assets, &config)
        .into_metrics()
        .unwrap();
    assert_eq!(half_even.total_value, dec!(0.12));
}

#[test]
fn test_money_decimals_config() {
    let third = Decimal::ONE / Decimal::from(3);
    let config = MetricsConfig::default().with_money_decimals(4);
    let metrics = calculate_portfolio_metrics(&[asset("T", third, dec!(1), dec!(1))], &config)
        .into_metrics()
        .unwrap();

    assert_eq!(metrics.total_value, dec!(0.3333));
    assert_eq!(metrics.total_value.scale(), 4);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let assets: Vec<Asset> = (0..250)
        .map(|i| {
            let i = Decimal::from(i);
            asset(
                &format!("S{i}"),
                dec!(1) + i,
                dec!(10) + i / dec!(7),
                dec!(11) + i / dec!(3),
            )
        })
        .collect();

    let sequential = calculate_portfolio_metrics(&assets, &MetricsConfig::sequential());
    let parallel = calculate_portfolio_metrics(&assets, &MetricsConfig::default().with_threshold(10));
    assert_eq!(sequential, parallel);
}

#[test]
fn test_report_json_shape() {
    let report = sample_portfolio().metrics(&MetricsConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status"], "computed");
    assert_eq!(json["worst_performer"], "GOOGL");
    assert_eq!(json["assets"].as_array().unwrap().len(), 3);

    let donated = calculate_portfolio_metrics(
        &[asset("X", dec!(10), Decimal::ZERO, dec!(100))],
        &MetricsConfig::default(),
    );
    let json = serde_json::to_value(&donated).unwrap();
    assert!(json["percentage_return"].is_null());
    assert!(json["sharpe_ratio"].is_null());
}
