//! Season defined as a set of calendar months.

use crate::doy::{DAYS_PER_MONTH, Doy};
use crate::error::CalendarError;

/// A set of calendar months, e.g. `{6, 7, 8}` for June through August.
///
/// The season is the same in every year of the no-leap calendar, so its
/// day-of-year membership and day count are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    members: [bool; 12],
}

impl Season {
    /// Creates a season from a list of month numbers.
    ///
    /// Duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptySeason`] if `months` is empty, or
    /// [`CalendarError::InvalidMonth`] if any month is outside 1..=12.
    pub fn new(months: &[u8]) -> Result<Self, CalendarError> {
        if months.is_empty() {
            return Err(CalendarError::EmptySeason);
        }
        let mut members = [false; 12];
        for &month in months {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::InvalidMonth { month });
            }
            members[month as usize - 1] = true;
        }
        Ok(Self { members })
    }

    /// Northern-hemisphere summer, June through August.
    pub fn summer() -> Self {
        Self::new(&[6, 7, 8]).expect("summer months are valid")
    }

    /// Returns `true` if the given month belongs to the season.
    pub fn contains_month(&self, month: u8) -> bool {
        (1..=12).contains(&month) && self.members[month as usize - 1]
    }

    /// Returns `true` if the given day-of-year falls inside the season.
    pub fn contains(&self, doy: Doy) -> bool {
        self.contains_month(doy.month())
    }

    /// Returns the member months in ascending order.
    pub fn months(&self) -> Vec<u8> {
        (1..=12u8).filter(|&m| self.contains_month(m)).collect()
    }

    /// Returns the number of days per year belonging to the season.
    pub fn day_count(&self) -> usize {
        self.months()
            .iter()
            .map(|&m| DAYS_PER_MONTH[m as usize] as usize)
            .sum()
    }

    /// Returns the season's days-of-year in ascending order.
    pub fn doys(&self) -> Vec<Doy> {
        (1..=365u16)
            .map(|d| Doy::new(d).expect("1..=365 is valid"))
            .filter(|&doy| self.contains(doy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Season::new(&[]).unwrap_err(), CalendarError::EmptySeason);
    }

    #[test]
    fn new_rejects_invalid_month() {
        assert_eq!(
            Season::new(&[6, 13]).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_ignores_duplicates() {
        let season = Season::new(&[6, 6, 7, 8, 7]).unwrap();
        assert_eq!(season.months(), vec![6, 7, 8]);
    }

    #[test]
    fn summer_has_92_days() {
        let summer = Season::summer();
        assert_eq!(summer.day_count(), 92);
        assert_eq!(summer.doys().len(), 92);
    }

    #[test]
    fn summer_membership() {
        let summer = Season::summer();
        assert!(summer.contains_month(6));
        assert!(summer.contains_month(8));
        assert!(!summer.contains_month(5));
        assert!(!summer.contains_month(9));

        let jun1 = Doy::from_month_day(6, 1).unwrap();
        let may31 = Doy::from_month_day(5, 31).unwrap();
        let aug31 = Doy::from_month_day(8, 31).unwrap();
        let sep1 = Doy::from_month_day(9, 1).unwrap();
        assert!(summer.contains(jun1));
        assert!(!summer.contains(may31));
        assert!(summer.contains(aug31));
        assert!(!summer.contains(sep1));
    }

    #[test]
    fn doys_are_contiguous_for_contiguous_months() {
        let summer = Season::summer();
        let doys = summer.doys();
        for pair in doys.windows(2) {
            assert_eq!(pair[1].get(), pair[0].get() + 1);
        }
        assert_eq!(doys[0], Doy::from_month_day(6, 1).unwrap());
    }

    #[test]
    fn non_contiguous_season() {
        let season = Season::new(&[12, 1, 2]).unwrap();
        assert_eq!(season.months(), vec![1, 2, 12]);
        assert_eq!(season.day_count(), 31 + 28 + 31);
    }
}
