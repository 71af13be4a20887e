//! Error types for the helios-calendar crate.

/// Error type for all fallible operations in the helios-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=365.
    #[error("invalid day of year: {doy} (must be 1..=365)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour-of-day value is outside the valid range 0..=23.
    #[error("invalid hour of day: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour value that was provided.
        hour: u8,
    },

    /// Returned when a season is constructed from an empty month set.
    #[error("season must contain at least one month")]
    EmptySeason,
}
