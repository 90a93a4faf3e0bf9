//! Descriptive statistics for the numeric columns of a dataset, plus
//! the per-column type listing printed alongside them.

use crate::record::{Dataset, COLUMNS};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean:  f64,
    /// Sample standard deviation (n − 1). NaN below two values.
    pub std:   f64,
    pub min:   f64,
    pub p25:   f64,
    pub p50:   f64,
    pub p75:   f64,
    pub max:   f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub rows:    usize,
    pub columns: usize,
    pub stats:   Vec<(&'static str, ColumnStats)>,
}

impl Description {
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.stats.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
    }
}

/// One line of the column listing: name, value type, non-null count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name:     &'static str,
    pub dtype:    &'static str,
    pub non_null: usize,
}

fn dtype_of(column: &str) -> &'static str {
    match column {
        "date" => "date",
        "quantity" => "u32",
        "unit_price" | "total_value" => "f64",
        _ => "string",
    }
}

/// Every column in display order. Records are never partial, so each
/// column is non-null on every row.
pub fn info(dataset: &Dataset) -> Vec<ColumnInfo> {
    COLUMNS
        .iter()
        .map(|&name| ColumnInfo {
            name,
            dtype: dtype_of(name),
            non_null: dataset.len(),
        })
        .collect()
}

/// count/mean/std/min/quartiles/max for quantity, unit_price, total_value.
pub fn describe(dataset: &Dataset) -> Description {
    let records = dataset.records();
    let quantity: Vec<f64> = records.iter().map(|r| f64::from(r.quantity)).collect();
    let unit_price: Vec<f64> = records.iter().map(|r| r.unit_price).collect();
    let total_value: Vec<f64> = records.iter().map(|r| r.total_value()).collect();
    let (rows, columns) = dataset.shape();

    Description {
        rows,
        columns,
        stats: vec![
            ("quantity", column_stats(quantity)),
            ("unit_price", column_stats(unit_price)),
            ("total_value", column_stats(total_value)),
        ],
    }
}

/// Stats for one column. An empty column reports count 0 and NaN
/// everywhere else.
pub fn column_stats(mut values: Vec<f64>) -> ColumnStats {
    let count = values.len();
    if count == 0 {
        return ColumnStats {
            count,
            mean: f64::NAN,
            std:  f64::NAN,
            min:  f64::NAN,
            p25:  f64::NAN,
            p50:  f64::NAN,
            p75:  f64::NAN,
            max:  f64::NAN,
        };
    }

    values.sort_by(f64::total_cmp);
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    ColumnStats {
        count,
        mean,
        std,
        min: values[0],
        p25: quantile(&values, 0.25),
        p50: quantile(&values, 0.50),
        p75: quantile(&values, 0.75),
        max: values[count - 1],
    }
}

/// Linear-interpolated quantile of already sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}
