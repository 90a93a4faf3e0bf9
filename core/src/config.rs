use crate::{
    aggregation::distribution::DEFAULT_BINS,
    calendar::DateRange,
    error::{PipelineError, PipelineResult},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const CONFIG_FILE: &str = "pipeline.json";

/// Largest accepted `daily_mean`. Poisson sampling needs `exp(-mean)`
/// to stay a normal float, which fails somewhere above 700.
pub const MAX_DAILY_MEAN: f64 = 500.0;

/// Inclusive integer bounds for quantity draws.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

/// Half-open bounds [min, max) for unit price draws.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    pub seed: u64,
    pub date_range: DateRange,
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    /// Agents are numbered 1..=agent_count.
    pub agent_count: u32,
    pub quantity: QuantityRange,
    pub unit_price: PriceRange,
    /// Poisson mean of records per day.
    pub daily_mean: f64,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Records on or after this date count as "current" for growth.
    #[serde(default = "default_growth_cutoff")]
    pub growth_cutoff: NaiveDate,
}

fn default_histogram_bins() -> usize {
    DEFAULT_BINS
}

fn default_growth_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default();
        Self {
            seed: 42,
            date_range: DateRange::new(start, end),
            categories: ["Laptop", "mouse", "Teclado", "Monitor", "Auriculares"]
                .into_iter()
                .map(String::from)
                .collect(),
            regions: ["Norte", "Sur", "Este", "Oeste", "Centro"]
                .into_iter()
                .map(String::from)
                .collect(),
            agent_count: 20,
            quantity: QuantityRange { min: 1, max: 15 },
            unit_price: PriceRange { min: 50.0, max: 1500.0 },
            daily_mean: 10.0,
            histogram_bins: default_histogram_bins(),
            growth_cutoff: default_growth_cutoff(),
        }
    }
}

impl PipelineConfig {
    /// Load from `<data_dir>/pipeline.json`.
    /// In tests, use PipelineConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = Path::new(data_dir).join(CONFIG_FILE);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: PipelineConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `data_dir` when the file exists, else the built-in defaults.
    pub fn load_or_default(data_dir: &str) -> anyhow::Result<Self> {
        if Path::new(data_dir).join(CONFIG_FILE).exists() {
            Self::load(data_dir)
        } else {
            log::info!("No {CONFIG_FILE} under {data_dir}; using built-in defaults");
            Ok(Self::default())
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if !self.date_range.is_valid() {
            return Err(PipelineError::InvalidDateRange {
                start: self.date_range.start,
                end: self.date_range.end,
            });
        }
        check_catalog("categories", &self.categories)?;
        check_catalog("regions", &self.regions)?;

        if self.agent_count == 0 {
            return Err(PipelineError::InvalidConfig {
                field: "agent_count",
                reason: "must be at least 1".into(),
            });
        }
        if self.quantity.min == 0 || self.quantity.min > self.quantity.max {
            return Err(PipelineError::InvalidConfig {
                field: "quantity",
                reason: format!(
                    "need 1 <= min <= max, got {}..={}",
                    self.quantity.min, self.quantity.max
                ),
            });
        }
        // Negated comparison also rejects NaN bounds.
        if !(self.unit_price.min > 0.0 && self.unit_price.min < self.unit_price.max) {
            return Err(PipelineError::InvalidConfig {
                field: "unit_price",
                reason: format!(
                    "need 0 < min < max, got {}..{}",
                    self.unit_price.min, self.unit_price.max
                ),
            });
        }
        if !(self.daily_mean > 0.0 && self.daily_mean <= MAX_DAILY_MEAN) {
            return Err(PipelineError::InvalidConfig {
                field: "daily_mean",
                reason: format!(
                    "need 0 < daily_mean <= {MAX_DAILY_MEAN}, got {}",
                    self.daily_mean
                ),
            });
        }
        if self.histogram_bins == 0 {
            return Err(PipelineError::InvalidConfig {
                field: "histogram_bins",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

fn check_catalog(name: &'static str, labels: &[String]) -> PipelineResult<()> {
    if labels.is_empty() {
        return Err(PipelineError::EmptyCatalog { name });
    }
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(PipelineError::DuplicateLabel {
                name,
                label: label.clone(),
            });
        }
    }
    Ok(())
}
