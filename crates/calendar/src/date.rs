//! No-leap date with year context.

use crate::doy::Doy;
use crate::error::CalendarError;

/// A date in the 365-day no-leap calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoLeapDate {
    year: i32,
    doy: Doy,
}

impl PartialOrd for NoLeapDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NoLeapDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.doy).cmp(&(other.year, other.doy))
    }
}

impl NoLeapDate {
    /// Creates a new `NoLeapDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// 365-day no-leap calendar (February 29 is never valid).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            year,
            doy: Doy::from_month_day(month, day)?,
        })
    }

    /// Creates a `NoLeapDate` from a year and an already-validated [`Doy`].
    pub fn from_year_doy(year: i32, doy: Doy) -> Self {
        Self { year, doy }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.doy.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.doy.day()
    }

    /// Returns the day-of-year.
    pub fn doy(self) -> Doy {
        self.doy
    }

    /// Returns the count of days since day 0 (January 1 of year 0).
    ///
    /// Dates before year 0 yield negative numbers. Differences of day
    /// numbers give exact day distances because every year has 365 days.
    pub fn day_number(self) -> i64 {
        self.year as i64 * 365 + self.doy.index() as i64
    }

    /// Returns the number of days from `self` to `other` (negative if
    /// `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Returns the next date, wrapping December 31 to January 1.
    pub fn next(self) -> Self {
        if self.doy.get() == 365 {
            Self::from_year_doy(self.year + 1, Doy::new(1).expect("doy 1 is always valid"))
        } else {
            Self::from_year_doy(
                self.year,
                Doy::new(self.doy.get() + 1).expect("doy + 1 <= 365"),
            )
        }
    }

    /// Returns the date `n` days after `self` (`n` may be negative).
    pub fn plus_days(self, n: i64) -> Self {
        let day_number = self.day_number() + n;
        let year = day_number.div_euclid(365);
        let index = day_number.rem_euclid(365);
        Self::from_year_doy(
            year as i32,
            Doy::new(index as u16 + 1).expect("rem_euclid(365) + 1 is in 1..=365"),
        )
    }
}

impl std::fmt::Display for NoLeapDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month(),
            self.day()
        )
    }
}

/// Returns `count` consecutive dates starting at `start`.
pub fn date_sequence(start: NoLeapDate, count: usize) -> Vec<NoLeapDate> {
    let mut dates = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        dates.push(current);
        current = current.next();
    }
    dates
}
