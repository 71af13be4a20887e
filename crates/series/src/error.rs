//! Error types for the helios-series crate.

/// Error type for all fallible operations in the helios-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a series is constructed from an empty value vector.
    #[error("series must contain at least one value")]
    EmptyData,

    /// Returned when an hourly series does not cover whole days where
    /// whole-day coverage is required.
    #[error("hourly series is not day-aligned: starts at hour {start_hour}, {n_values} values")]
    NotDayAligned {
        /// Hour of day of the first sample.
        start_hour: u8,
        /// Total number of samples.
        n_values: usize,
    },
}
