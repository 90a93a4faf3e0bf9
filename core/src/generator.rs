//! Synthetic sales record generation.
//!
//! DRAW ORDER (fixed, never reordered):
//!   for each date, chronologically:
//!     1. record count ~ Poisson(daily_mean)
//!     2. per record: category, region, quantity, unit_price, agent
//!
//! Changing this order changes every dataset for every seed.

use crate::{
    config::PipelineConfig,
    error::PipelineResult,
    record::{Dataset, SaleRecord},
    rng::{RngBank, StreamRng, StreamSlot},
};
use chrono::NaiveDate;

/// Upper bound on the up-front record allocation.
const MAX_PREALLOCATED: f64 = 1_048_576.0;

pub struct RecordGenerator<'a> {
    config: &'a PipelineConfig,
}

impl<'a> RecordGenerator<'a> {
    /// Validates the config up front; generation itself cannot fail.
    pub fn new(config: &'a PipelineConfig) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn generate(&self) -> Dataset {
        let bank = RngBank::new(self.config.seed);
        let mut rng = bank.for_stream(StreamSlot::Records);

        let expected = self.config.date_range.len_days() as f64 * self.config.daily_mean;
        let mut records = Vec::with_capacity(expected.min(MAX_PREALLOCATED) as usize);
        for date in self.config.date_range.days() {
            let count = rng.poisson(self.config.daily_mean);
            for _ in 0..count {
                records.push(self.draw_record(date, &mut rng));
            }
        }

        log::info!(
            "generated {} records over {} days (seed={}, stream={})",
            records.len(),
            self.config.date_range.len_days(),
            self.config.seed,
            rng.name
        );
        Dataset::from_records(records)
    }

    fn draw_record(&self, date: NaiveDate, rng: &mut StreamRng) -> SaleRecord {
        let category = rng.choose(&self.config.categories).clone();
        let region = rng.choose(&self.config.regions).clone();
        let quantity = rng.int_inclusive(self.config.quantity.min, self.config.quantity.max);
        let unit_price = rng.uniform(self.config.unit_price.min, self.config.unit_price.max);
        let agent = rng.int_inclusive(1, self.config.agent_count);
        SaleRecord {
            date,
            category,
            region,
            quantity,
            unit_price,
            agent_id: format!("agent_{agent}"),
        }
    }
}

/// Validate `config` and generate its dataset.
pub fn generate(config: &PipelineConfig) -> PipelineResult<Dataset> {
    Ok(RecordGenerator::new(config)?.generate())
}
