//! Date parsing for the `YYYY-MM-DD` text form used in files and on the
//! command line.

use helios_calendar::NoLeapDate;

use crate::error::IoError;

/// Parses a `YYYY-MM-DD` string into a [`NoLeapDate`].
///
/// February 29 is rejected like any other out-of-range day; the calendar
/// has no leap years.
///
/// # Errors
///
/// Returns [`IoError::InvalidDate`] if the text is not three dash-separated
/// numbers or the month/day combination is invalid.
pub fn parse_date(text: &str) -> Result<NoLeapDate, IoError> {
    let invalid = || IoError::InvalidDate {
        text: text.to_string(),
    };

    let mut parts = text.splitn(3, '-');
    let year: i32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let month: u8 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let day: u8 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;

    NoLeapDate::new(year, month, day).map_err(|_| invalid())
}
