//! Error types for the helios-climatology crate.

use helios_calendar::Doy;

/// Error type for all fallible operations in the helios-climatology crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClimatologyError {
    /// Returned when a percentile value is outside 0..=100.
    #[error("invalid percentile: {percentile} (must be in 0..=100)")]
    InvalidPercentile {
        /// The invalid percentile that was provided.
        percentile: f64,
    },

    /// Returned when a statistic group has observations from fewer than
    /// two distinct years.
    #[error("insufficient data for day-of-year {doy}{}: {n_years} contributing year(s), need at least 2", hour_suffix(*hour))]
    InsufficientData {
        /// The day-of-year of the degenerate group.
        doy: Doy,
        /// The hour of day, for hourly groups.
        hour: Option<u8>,
        /// The number of distinct years contributing finite observations.
        n_years: usize,
    },

    /// Returned when a required profile entry is absent.
    #[error("no profile value for day-of-year {doy}{}", hour_suffix(*hour))]
    UndefinedLookup {
        /// The day-of-year that was looked up.
        doy: Doy,
        /// The hour of day, for hourly lookups.
        hour: Option<u8>,
    },

    /// Returned when best-day selection finds no complete candidate day.
    #[error("no complete 24-hour day available for best-day selection")]
    NoCandidateDay,
}

fn hour_suffix(hour: Option<u8>) -> String {
    match hour {
        Some(h) => format!(" hour {h}"),
        None => String::new(),
    }
}
