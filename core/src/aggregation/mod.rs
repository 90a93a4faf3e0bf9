//! The aggregation engine. Five chart-ready summaries of a working set.
//!
//! RULES:
//!   - Every routine is a pure function of the working set.
//!   - No routine mutates or caches anything; callers recompute
//!     from scratch on every selection change.
//!   - Degenerate inputs (empty set, zero variance, zero totals)
//!     produce documented fallback values, never errors or panics.

pub mod correlation;
pub mod distribution;
pub mod ranking;
pub mod share;
pub mod trend;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use distribution::{histogram, Histogram};
pub use ranking::{category_ranking, CategoryRanking};
pub use share::{regional_share, RegionalShare};
pub use trend::{monthly_trend, MonthlyTrend};

pub const TREND_TITLE: &str = "Monthly Sales Trend";
pub const RANKING_TITLE: &str = "Sales by Product";
pub const SHARE_TITLE: &str = "Sales by Region";
pub const CORRELATION_TITLE: &str = "Correlation Between Numeric Variables";
pub const DISTRIBUTION_TITLE: &str = "Distribution of Individual Sales";
