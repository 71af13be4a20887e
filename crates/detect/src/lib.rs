//! # helios-detect
//!
//! Heatwave event detection for the Helios pipeline.
//!
//! A heatwave event is a maximal run of consecutive season days whose
//! daily maximum strictly exceeds the day-of-year percentile threshold,
//! with run length at least the configured minimum. Per-year candidate
//! runs from [`detect_events`] are combined by [`merge_intervals`] into
//! the canonical event list: sorted, non-overlapping, non-adjacent.

mod detect;
mod error;
mod interval;
mod merge;

pub use detect::{DetectedEvent, detect_events};
pub use error::DetectError;
pub use interval::Interval;
pub use merge::merge_intervals;
