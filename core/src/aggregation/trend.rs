use super::TREND_TITLE;
use crate::{calendar::Period, filter::WorkingSet};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period:      Period,
    pub label:       String,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub title:  &'static str,
    pub points: Vec<TrendPoint>,
}

impl MonthlyTrend {
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.total_value).sum()
    }
}

/// Sales summed per calendar month, oldest month first.
/// Months with no records are absent, not zero-filled.
pub fn monthly_trend(set: &WorkingSet<'_>) -> MonthlyTrend {
    let mut by_period: BTreeMap<Period, f64> = BTreeMap::new();
    for record in set.iter() {
        *by_period.entry(Period::of(record.date)).or_insert(0.0) += record.total_value();
    }

    MonthlyTrend {
        title:  TREND_TITLE,
        points: by_period
            .into_iter()
            .map(|(period, total_value)| TrendPoint {
                period,
                label: period.label(),
                total_value,
            })
            .collect(),
    }
}
