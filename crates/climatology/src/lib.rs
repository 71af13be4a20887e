//! # helios-climatology
//!
//! Climatological baseline profiles for the Helios heatwave pipeline:
//!
//! - [`ThresholdProfile`] — per-day-of-year percentile of daily maxima,
//!   the exceedance threshold for event detection.
//! - [`DiurnalProfile`] — per-(day-of-year, hour) median of season hours,
//!   the typical diurnal cycle.
//! - [`BestDayProfile`] — the observed 24-hour cycle closest to the
//!   diurnal median, used to replace companion-variable event hours.
//!
//! All profile groups require finite observations from at least two
//! distinct years; a single year cannot define a climatology.

mod best_day;
mod diurnal;
mod error;
mod threshold;

pub use best_day::BestDayProfile;
pub use diurnal::DiurnalProfile;
pub use error::ClimatologyError;
pub use threshold::ThresholdProfile;
