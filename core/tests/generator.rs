use chrono::NaiveDate;
use salesdash_core::{
    calendar::DateRange,
    config::PipelineConfig,
    error::PipelineError,
    generator::{self, RecordGenerator},
};
use std::collections::HashSet;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Every generated field stays inside its configured domain.
#[test]
fn generated_values_respect_schema_bounds() {
    let config = PipelineConfig::default();
    let data = generator::generate(&config).unwrap();
    assert!(!data.is_empty(), "two years at ~10/day should not be empty");

    let agents: HashSet<String> = (1..=config.agent_count).map(|n| format!("agent_{n}")).collect();
    for r in data.records() {
        assert!(config.date_range.contains(r.date), "date {} out of range", r.date);
        assert!(config.categories.contains(&r.category), "unknown category {}", r.category);
        assert!(config.regions.contains(&r.region), "unknown region {}", r.region);
        assert!((1..=15).contains(&r.quantity), "quantity {} out of [1,15]", r.quantity);
        assert!(
            (50.0..1500.0).contains(&r.unit_price),
            "unit_price {} out of [50,1500)",
            r.unit_price
        );
        assert!(agents.contains(&r.agent_id), "unexpected agent {}", r.agent_id);
    }
}

/// total_value is always exactly quantity × unit_price.
#[test]
fn derived_total_matches_its_factors() {
    let data = generator::generate(&PipelineConfig::default()).unwrap();
    for r in data.records() {
        let expected = f64::from(r.quantity) * r.unit_price;
        assert!(
            (r.total_value() - expected).abs() < 1e-9,
            "total_value {} != {} × {}",
            r.total_value(),
            r.quantity,
            r.unit_price
        );
    }
}

/// Poisson(10) per day over 731 days lands near 7,310 records.
#[test]
fn daily_volume_averages_near_mean() {
    let config = PipelineConfig::default();
    let data = generator::generate(&config).unwrap();
    let per_day = data.len() as f64 / config.date_range.len_days() as f64;
    assert!(
        (per_day - 10.0).abs() < 0.5,
        "average records per day {per_day:.2} far from 10"
    );
}

/// All catalog entries show up over a two-year run.
#[test]
fn every_category_and_region_is_drawn() {
    let config = PipelineConfig::default();
    let data = generator::generate(&config).unwrap();
    let cats: HashSet<&str> = data.records().iter().map(|r| r.category.as_str()).collect();
    let regs: HashSet<&str> = data.records().iter().map(|r| r.region.as_str()).collect();
    assert_eq!(cats.len(), config.categories.len());
    assert_eq!(regs.len(), config.regions.len());
}

#[test]
fn single_day_range_only_yields_that_day() {
    let mut config = PipelineConfig::default();
    config.date_range = DateRange::new(d(2024, 3, 1), d(2024, 3, 1));
    let data = generator::generate(&config).unwrap();
    assert!(data.records().iter().all(|r| r.date == d(2024, 3, 1)));
}

#[test]
fn inverted_date_range_is_rejected() {
    let mut config = PipelineConfig::default();
    config.date_range = DateRange::new(d(2024, 1, 2), d(2024, 1, 1));
    let err = RecordGenerator::new(&config).err().expect("should reject");
    assert!(matches!(err, PipelineError::InvalidDateRange { .. }), "got {err}");
}

#[test]
fn empty_catalog_is_rejected() {
    let mut config = PipelineConfig::default();
    config.regions.clear();
    let err = generator::generate(&config).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyCatalog { name: "regions" }), "got {err}");
}

#[test]
fn duplicate_label_is_rejected() {
    let mut config = PipelineConfig::default();
    config.categories.push("Laptop".into());
    let err = generator::generate(&config).unwrap_err();
    assert!(matches!(err, PipelineError::DuplicateLabel { .. }), "got {err}");
}
