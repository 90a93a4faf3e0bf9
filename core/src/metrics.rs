//! Headline metrics over a working set, and their display formatting.
//!
//! Zero guards are part of the contract:
//!   - mean is 0 for an empty set
//!   - growth is exactly 0.0 when the pre-cutoff total is not positive

use crate::filter::WorkingSet;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub total:      f64,
    pub mean:       f64,
    pub count:      usize,
    pub growth_pct: f64,
}

/// Metrics rendered the way the dashboard cards show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMetrics {
    pub total:      String,
    pub mean:       String,
    pub count:      String,
    pub growth_pct: String,
}

impl MetricsSnapshot {
    pub fn compute(set: &WorkingSet<'_>, growth_cutoff: NaiveDate) -> Self {
        let mut total = 0.0;
        let mut current = 0.0;
        let mut prior = 0.0;
        for record in set.iter() {
            let value = record.total_value();
            total += value;
            if record.date >= growth_cutoff {
                current += value;
            } else {
                prior += value;
            }
        }

        let count = set.len();
        let mean = if count > 0 { total / count as f64 } else { 0.0 };

        Self {
            total,
            mean,
            count,
            growth_pct: growth_pct(current, prior),
        }
    }

    pub fn formatted(&self) -> FormattedMetrics {
        FormattedMetrics {
            total:      format_currency(self.total),
            mean:       format_currency(self.mean),
            count:      group_thousands(self.count as i64),
            growth_pct: format_percent(self.growth_pct),
        }
    }
}

/// (current / prior − 1) × 100, or exactly 0.0 when prior <= 0.
pub fn growth_pct(current: f64, prior: f64) -> f64 {
    if prior > 0.0 {
        (current / prior - 1.0) * 100.0
    } else {
        0.0
    }
}

/// `$1,234`, no decimals.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}

/// `12.3%`, one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345), "12,345");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-1_234), "-1,234");
    }

    #[test]
    fn currency_has_no_decimals() {
        assert_eq!(format_currency(1_234_567.8), "$1,234,568");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-2_500.2), "-$2,500");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-3.44), "-3.4%");
    }

    #[test]
    fn growth_guard_returns_exact_zero() {
        assert_eq!(growth_pct(500.0, 0.0), 0.0);
        assert_eq!(growth_pct(500.0, -10.0), 0.0);
        assert!((growth_pct(150.0, 100.0) - 50.0).abs() < 1e-9);
        assert!((growth_pct(50.0, 100.0) + 50.0).abs() < 1e-9);
    }
}
