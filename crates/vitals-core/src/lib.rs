//! Core domain types and pure logic for vitals
//!
//! Everything in this crate is side-effect free: the health classifier,
//! unit conversions, and parameter normalization. Metric acquisition lives
//! in `vitals-collect`; protocol concerns live in `vitals-api`.

pub mod error;
pub mod health;
pub mod params;
pub mod units;

pub use error::{Error, Result};
pub use health::{classify, HealthStatus, HealthVerdict, MetricSample};
pub use params::{clamp_process_limit, split_and_trim, SortBy};
pub use units::{bytes_to_human, convert_temperature, TempUnit};
