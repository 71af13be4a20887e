//! Hourly timestamp: a no-leap date plus an hour of day.

use crate::date::NoLeapDate;
use crate::error::CalendarError;

/// An hourly timestamp in the 365-day no-leap calendar.
///
/// Every day has exactly 24 hours, so hour numbers form a uniform grid
/// with no gaps. Hour 0 of a date is the first sample of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourStamp {
    date: NoLeapDate,
    hour: u8,
}

impl PartialOrd for HourStamp {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HourStamp {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.date, self.hour).cmp(&(other.date, other.hour))
    }
}

impl HourStamp {
    /// Creates a new `HourStamp` from a date and an hour of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHour`] if `hour` is not in 0..=23.
    pub fn new(date: NoLeapDate, hour: u8) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::InvalidHour { hour });
        }
        Ok(Self { date, hour })
    }

    /// Returns hour 0 of the given date.
    pub fn start_of_day(date: NoLeapDate) -> Self {
        Self { date, hour: 0 }
    }

    /// Returns the date part.
    pub fn date(self) -> NoLeapDate {
        self.date
    }

    /// Returns the hour of day (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the count of hours since hour 0 of day 0 (January 1, year 0).
    ///
    /// Differences of hour numbers give exact hourly offsets.
    pub fn hour_number(self) -> i64 {
        self.date.day_number() * 24 + self.hour as i64
    }

    /// Returns the number of hours from `self` to `other` (negative if
    /// `other` is earlier).
    pub fn hours_until(self, other: Self) -> i64 {
        other.hour_number() - self.hour_number()
    }

    /// Returns the stamp `n` hours after `self` (`n` may be negative).
    pub fn plus_hours(self, n: i64) -> Self {
        let hour_number = self.hour_number() + n;
        let day_number = hour_number.div_euclid(24);
        let hour = hour_number.rem_euclid(24) as u8;
        let date = NoLeapDate::new(0, 1, 1)
            .expect("Jan 1 year 0 is always valid")
            .plus_days(day_number);
        Self { date, hour }
    }
}

impl std::fmt::Display for HourStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}:00", self.date, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> NoLeapDate {
        NoLeapDate::new(y, m, d).unwrap()
    }

    #[test]
    fn new_validates_hour() {
        assert!(HourStamp::new(date(2000, 1, 1), 23).is_ok());
        assert_eq!(
            HourStamp::new(date(2000, 1, 1), 24).unwrap_err(),
            CalendarError::InvalidHour { hour: 24 }
        );
    }

    #[test]
    fn hour_numbers_are_contiguous() {
        let a = HourStamp::new(date(2000, 6, 1), 23).unwrap();
        let b = HourStamp::new(date(2000, 6, 2), 0).unwrap();
        assert_eq!(a.hours_until(b), 1);
    }

    #[test]
    fn hours_until_across_days() {
        let a = HourStamp::start_of_day(date(2004, 6, 16));
        let b = HourStamp::new(date(2004, 6, 30), 23).unwrap();
        // 15 inclusive days of 24 hours, minus the first hour.
        assert_eq!(a.hours_until(b), 15 * 24 - 1);
    }

    #[test]
    fn plus_hours_roundtrip() {
        let a = HourStamp::new(date(2004, 6, 16), 7).unwrap();
        assert_eq!(a.plus_hours(0), a);
        assert_eq!(a.plus_hours(17), HourStamp::start_of_day(date(2004, 6, 17)));
        assert_eq!(a.plus_hours(-8), HourStamp::new(date(2004, 6, 15), 23).unwrap());
        assert_eq!(a.plus_hours(24 * 365), HourStamp::new(date(2005, 6, 16), 7).unwrap());
    }

    #[test]
    fn plus_hours_across_year_boundary() {
        let a = HourStamp::start_of_day(date(2000, 1, 1));
        assert_eq!(a.plus_hours(-1), HourStamp::new(date(1999, 12, 31), 23).unwrap());
    }

    #[test]
    fn ordering() {
        let a = HourStamp::new(date(2000, 1, 1), 5).unwrap();
        let b = HourStamp::new(date(2000, 1, 1), 6).unwrap();
        let c = HourStamp::start_of_day(date(2000, 1, 2));
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display_format() {
        let a = HourStamp::new(date(2004, 6, 5), 7).unwrap();
        assert_eq!(a.to_string(), "2004-06-05T07:00");
    }
}
