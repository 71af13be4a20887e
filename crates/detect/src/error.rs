//! Error types for the helios-detect crate.

use helios_calendar::NoLeapDate;
use helios_climatology::ClimatologyError;

/// Error type for all fallible operations in the helios-detect crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectError {
    /// Returned when an interval would end before it starts.
    #[error("degenerate interval: end {end} precedes start {start}")]
    DegenerateInterval {
        /// The interval start.
        start: NoLeapDate,
        /// The offending end.
        end: NoLeapDate,
    },

    /// Returned when the minimum run length is zero.
    #[error("minimum run length must be at least 1")]
    InvalidRunLength,

    /// Returned when a scanned year's season days are not fully covered
    /// by the input series.
    #[error("season coverage incomplete for year {year}: missing {date}")]
    IncompleteSeason {
        /// The year being scanned.
        year: i32,
        /// The first season date absent from the series.
        date: NoLeapDate,
    },

    /// Wrapped profile lookup failure from the climatology crate.
    #[error(transparent)]
    Profile(#[from] ClimatologyError),
}
