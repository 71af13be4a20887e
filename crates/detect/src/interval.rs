//! Inclusive day intervals.

use helios_calendar::NoLeapDate;

use crate::error::DetectError;

/// An inclusive interval of no-leap calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: NoLeapDate,
    end: NoLeapDate,
}

impl Interval {
    /// Creates an interval from inclusive endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::DegenerateInterval`] if `end < start`.
    pub fn new(start: NoLeapDate, end: NoLeapDate) -> Result<Self, DetectError> {
        if end < start {
            return Err(DetectError::DegenerateInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a single-day interval.
    pub fn single_day(date: NoLeapDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day.
    pub fn start(self) -> NoLeapDate {
        self.start
    }

    /// Returns the last day (inclusive).
    pub fn end(self) -> NoLeapDate {
        self.end
    }

    /// Returns the number of days covered (at least 1).
    pub fn days(self) -> u64 {
        (self.start.days_until(self.end) + 1) as u64
    }

    /// Returns the number of hours covered (`days * 24`).
    pub fn hours(self) -> u64 {
        self.days() * 24
    }

    /// Returns `true` if `date` falls inside the interval.
    pub fn contains(self, date: NoLeapDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns `true` if the two intervals share at least one day.
    pub fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if the two intervals touch without overlapping:
    /// one ends on the day before the other starts.
    pub fn adjacent(self, other: Self) -> bool {
        self.end.next() == other.start || other.end.next() == self.start
    }

    /// Iterates over the days of the interval in order.
    pub fn iter_days(self) -> impl Iterator<Item = NoLeapDate> {
        let n = self.days();
        let start = self.start;
        (0..n).map(move |i| start.plus_days(i as i64))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> NoLeapDate {
        NoLeapDate::new(y, m, d).unwrap()
    }

    #[test]
    fn new_rejects_reversed() {
        let err = Interval::new(date(2004, 6, 30), date(2004, 6, 16)).unwrap_err();
        assert!(matches!(err, DetectError::DegenerateInterval { .. }));
    }

    #[test]
    fn day_and_hour_counts() {
        let iv = Interval::new(date(2004, 6, 16), date(2004, 6, 30)).unwrap();
        assert_eq!(iv.days(), 15);
        assert_eq!(iv.hours(), 360);
        assert_eq!(Interval::single_day(date(2004, 6, 16)).days(), 1);
    }

    #[test]
    fn contains_bounds() {
        let iv = Interval::new(date(2004, 6, 16), date(2004, 6, 30)).unwrap();
        assert!(iv.contains(date(2004, 6, 16)));
        assert!(iv.contains(date(2004, 6, 30)));
        assert!(!iv.contains(date(2004, 6, 15)));
        assert!(!iv.contains(date(2004, 7, 1)));
    }

    #[test]
    fn overlap_and_adjacency() {
        let a = Interval::new(date(2004, 6, 1), date(2004, 6, 10)).unwrap();
        let b = Interval::new(date(2004, 6, 10), date(2004, 6, 20)).unwrap();
        let c = Interval::new(date(2004, 6, 11), date(2004, 6, 20)).unwrap();
        let d = Interval::new(date(2004, 6, 12), date(2004, 6, 20)).unwrap();

        assert!(a.overlaps(b));
        assert!(!a.overlaps(c));
        assert!(a.adjacent(c));
        assert!(c.adjacent(a));
        assert!(!a.adjacent(d));
        assert!(!a.adjacent(b));
    }

    #[test]
    fn iter_days_inclusive() {
        let iv = Interval::new(date(2004, 12, 30), date(2005, 1, 2)).unwrap();
        let days: Vec<_> = iv.iter_days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2004, 12, 30));
        assert_eq!(days[3], date(2005, 1, 2));
    }

    #[test]
    fn display_format() {
        let iv = Interval::new(date(2004, 6, 16), date(2004, 6, 30)).unwrap();
        assert_eq!(iv.to_string(), "[2004-06-16, 2004-06-30]");
    }
}
