//! Error types for the helios-edit crate.

use helios_climatology::ClimatologyError;
use helios_detect::Interval;

/// Error type for all fallible operations in the helios-edit crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    /// Returned when an edit interval is not fully covered by the series.
    #[error("interval {interval} lies outside the series")]
    IntervalOutsideSeries {
        /// The interval that was requested.
        interval: Interval,
    },

    /// Returned when a signature holds a non-finite deviation.
    #[error("undefined signature value at hour offset {offset}")]
    UndefinedSignature {
        /// Elapsed-hour offset of the first non-finite deviation.
        offset: usize,
    },

    /// Returned when a signature's length does not match its source
    /// interval's hour count.
    #[error("signature length {got} does not match source interval hour count {expected}")]
    SignatureLengthMismatch {
        /// Hour count of the source interval.
        expected: usize,
        /// Number of deviations provided.
        got: usize,
    },

    /// Returned when a magnitude scale factor is not finite.
    #[error("magnitude must be finite, got {magnitude}")]
    InvalidMagnitude {
        /// The offending magnitude.
        magnitude: f64,
    },

    /// Wrapped profile lookup failure from the climatology crate.
    #[error(transparent)]
    Profile(#[from] ClimatologyError),
}
