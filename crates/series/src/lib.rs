//! # helios-series
//!
//! Single-point time series for the Helios heatwave pipeline.
//!
//! Both series types store a start stamp and a contiguous value vector;
//! timestamps are implied by index. That makes the fixed-step,
//! strictly-increasing grid an invariant of construction rather than a
//! property to validate downstream.

mod daily;
mod error;
mod hourly;

pub use daily::DailySeries;
pub use error::SeriesError;
pub use hourly::{HourlySeries, hourly_from_days};
