//! # helios-calendar
//!
//! Date and hour arithmetic for the 365-day no-leap calendar used across
//! the Helios heatwave pipeline.
//!
//! The pipeline's leap policy lives here: February 29 is not representable,
//! day-of-year is always 1..=365, and a given day-of-year maps to the same
//! calendar day in every year. Ingest is expected to drop leap-day samples
//! before building series on this calendar.
//!
//! ## Quick Start
//!
//! ```
//! use helios_calendar::{Doy, HourStamp, NoLeapDate, Season};
//!
//! let doy = Doy::from_month_day(6, 16).unwrap();
//! assert_eq!(doy.get(), 167);
//!
//! let start = NoLeapDate::new(2004, 6, 16).unwrap();
//! let end = start.plus_days(14);
//! assert_eq!(end, NoLeapDate::new(2004, 6, 30).unwrap());
//!
//! let stamp = HourStamp::new(start, 12).unwrap();
//! assert_eq!(stamp.plus_hours(12).date(), start.next());
//!
//! assert!(Season::summer().contains(doy));
//! ```

mod date;
mod doy;
mod error;
mod hour;
mod season;

pub use date::{NoLeapDate, date_sequence};
pub use doy::Doy;
pub use error::CalendarError;
pub use hour::HourStamp;
pub use season::Season;
