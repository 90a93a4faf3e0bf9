//! The two-record Laptop scenario worked through end to end.

use chrono::NaiveDate;
use salesdash_core::{
    config::PipelineConfig,
    dashboard::Dashboard,
    filter::Selection,
    record::{Dataset, SaleRecord},
};

fn laptop(region: &str, quantity: u32, unit_price: f64, date: (i32, u32, u32)) -> SaleRecord {
    SaleRecord {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        category: "Laptop".into(),
        region: region.into(),
        quantity,
        unit_price,
        agent_id: "agent_1".into(),
    }
}

fn scenario() -> Dashboard {
    let data = Dataset::from_records(vec![
        laptop("Norte", 2, 100.0, (2024, 2, 1)),
        laptop("Sur", 1, 200.0, (2023, 6, 1)),
    ]);
    Dashboard::with_dataset(PipelineConfig::default(), data)
}

#[test]
fn two_laptop_sales_scenario() {
    let dashboard = scenario();
    let totals: Vec<f64> = dashboard
        .dataset()
        .records()
        .iter()
        .map(|r| r.total_value())
        .collect();
    assert_eq!(totals, vec![200.0, 200.0]);

    let view = dashboard.compute(&Selection::all(dashboard.config()));

    assert_eq!(view.metrics.total, 400.0);
    assert_eq!(view.metrics.mean, 200.0);
    assert_eq!(view.metrics.count, 2);
    assert_eq!(view.metrics.growth_pct, 0.0);

    assert_eq!(view.ranking.entries.len(), 1);
    assert_eq!(view.ranking.entries[0].category, "Laptop");
    assert_eq!(view.ranking.entries[0].total_value, 400.0);

    assert_eq!(view.formatted.total, "$400");
    assert_eq!(view.formatted.mean, "$200");
    assert_eq!(view.formatted.count, "2");
    assert_eq!(view.formatted.growth_pct, "0.0%");
}

#[test]
fn scenario_regions_split_evenly() {
    let dashboard = scenario();
    let view = dashboard.compute(&Selection::all(dashboard.config()));
    let norte = view.share.get("Norte").unwrap();
    let sur = view.share.get("Sur").unwrap();
    assert_eq!(norte.proportion, 0.5);
    assert_eq!(sur.proportion, 0.5);

    let labels: Vec<&str> = view.trend.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["2023-06", "2024-02"]);
}

/// Both totals equal 200, so the histogram range collapses to one value.
#[test]
fn scenario_histogram_handles_identical_values() {
    let dashboard = scenario();
    let view = dashboard.compute(&Selection::all(dashboard.config()));
    assert_eq!(view.distribution.bucket_count(), 50);
    assert_eq!(view.distribution.total_count(), 2);
}
