use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Catalog '{name}' is empty")]
    EmptyCatalog { name: &'static str },

    #[error("Catalog '{name}' lists '{label}' more than once")]
    DuplicateLabel { name: &'static str, label: String },

    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
