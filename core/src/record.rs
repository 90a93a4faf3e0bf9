//! The transaction record and the full, immutable record set.
//!
//! `total_value` is derived: it is computed from quantity and unit
//! price on every read and never stored, so it cannot drift from
//! its factors.

use crate::types::{AgentId, Category, Region};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names in display order, as the describe table prints them.
pub const COLUMNS: [&str; 7] = [
    "date",
    "category",
    "region",
    "quantity",
    "unit_price",
    "agent_id",
    "total_value",
];

/// quantity × unit_price. The one place the derivation lives.
pub fn total_value(quantity: u32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date:       NaiveDate,
    pub category:   Category,
    pub region:     Region,
    pub quantity:   u32,
    pub unit_price: f64,
    pub agent_id:   AgentId,
}

impl SaleRecord {
    pub fn total_value(&self) -> f64 {
        total_value(self.quantity, self.unit_price)
    }
}

/// A record as the presentation layer sees it, derived field included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRow<'a> {
    #[serde(flatten)]
    pub record:      &'a SaleRecord,
    pub total_value: f64,
}

impl<'a> From<&'a SaleRecord> for SaleRow<'a> {
    fn from(record: &'a SaleRecord) -> Self {
        Self {
            record,
            total_value: record.total_value(),
        }
    }
}

/// The full record set. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (rows, columns), the dataset's shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), COLUMNS.len())
    }

    /// The first `n` rows with their derived totals.
    pub fn head(&self, n: usize) -> Vec<SaleRow<'_>> {
        self.records.iter().take(n).map(SaleRow::from).collect()
    }
}
