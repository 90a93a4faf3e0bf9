//! Sales analytics pipeline: synthetic record generation, filtering,
//! and the chart-ready summaries a dashboard renders.

pub mod aggregation;
pub mod calendar;
pub mod command;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod generator;
pub mod metrics;
pub mod record;
pub mod rng;
pub mod summary;
pub mod types;
