//! Day-of-year newtype for the 365-day no-leap calendar.

use crate::error::CalendarError;

/// Number of days in each month (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts (index 0 unused, January = DOY 1).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Day-of-year in the 365-day no-leap calendar (1..=365).
///
/// February always has 28 days, so a given `Doy` maps to the same
/// `(month, day)` pair in every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=365.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=365).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for the month.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(MONTH_START_DOY[month as usize] + day as u16 - 1))
    }

    /// Returns the inner day-of-year value (1..=365).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=364).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the month (1..=12) containing this day-of-year.
    pub fn month(self) -> u8 {
        // MONTH_START_DOY is ascending, so the containing month is the last
        // entry that does not exceed self.0.
        let mut month = 1u8;
        while month < 12 && MONTH_START_DOY[month as usize + 1] <= self.0 {
            month += 1;
        }
        month
    }

    /// Returns the day within the month (1..=31) for this day-of-year.
    pub fn day(self) -> u8 {
        let month = self.month();
        (self.0 - MONTH_START_DOY[month as usize] + 1) as u8
    }

    /// Returns the `(month, day)` pair for this day-of-year.
    pub fn month_day(self) -> (u8, u8) {
        (self.month(), self.day())
    }
}

impl std::fmt::Display for Doy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bounds() {
        assert_eq!(Doy::new(1).unwrap().get(), 1);
        assert_eq!(Doy::new(365).unwrap().get(), 365);
        assert_eq!(
            Doy::new(0).unwrap_err(),
            CalendarError::InvalidDoy { doy: 0 }
        );
        assert_eq!(
            Doy::new(366).unwrap_err(),
            CalendarError::InvalidDoy { doy: 366 }
        );
    }

    #[test]
    fn from_month_day_anchors() {
        assert_eq!(Doy::from_month_day(1, 1).unwrap().get(), 1);
        assert_eq!(Doy::from_month_day(2, 28).unwrap().get(), 59);
        assert_eq!(Doy::from_month_day(6, 1).unwrap().get(), 152);
        assert_eq!(Doy::from_month_day(8, 31).unwrap().get(), 243);
        assert_eq!(Doy::from_month_day(12, 31).unwrap().get(), 365);
    }

    #[test]
    fn from_month_day_rejects_feb_29() {
        assert_eq!(
            Doy::from_month_day(2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn from_month_day_rejects_bad_month() {
        assert_eq!(
            Doy::from_month_day(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Doy::from_month_day(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn roundtrip_all_365() {
        for d in 1..=365u16 {
            let doy = Doy::new(d).unwrap();
            let (m, day) = doy.month_day();
            assert_eq!(
                Doy::from_month_day(m, day).unwrap(),
                doy,
                "roundtrip failed for doy {d}: month_day=({m}, {day})"
            );
        }
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(Doy::new(31).unwrap().month(), 1);
        assert_eq!(Doy::new(32).unwrap().month(), 2);
        assert_eq!(Doy::new(59).unwrap().month(), 2);
        assert_eq!(Doy::new(60).unwrap().month(), 3);
        assert_eq!(Doy::new(365).unwrap().month(), 12);
    }

    #[test]
    fn summer_doy_span_is_92_days() {
        let first = Doy::from_month_day(6, 1).unwrap();
        let last = Doy::from_month_day(8, 31).unwrap();
        assert_eq!(last.get() - first.get() + 1, 92);
    }

    #[test]
    fn table_integrity() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + DAYS_PER_MONTH[m] as u16,
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }

    #[test]
    fn copy_and_ord() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Doy>();
        assert!(Doy::new(1).unwrap() < Doy::new(365).unwrap());
    }
}
