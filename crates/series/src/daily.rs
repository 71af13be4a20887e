//! Daily-resolution series with implied date grid.

use helios_calendar::NoLeapDate;

use crate::error::SeriesError;

/// A contiguous daily series: one value per no-leap calendar day starting
/// at `start`.
///
/// Timestamps are implied by index, so the grid is strictly increasing
/// with a fixed one-day step by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    start: NoLeapDate,
    values: Vec<f64>,
}

impl DailySeries {
    /// Creates a daily series starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyData`] if `values` is empty.
    pub fn new(start: NoLeapDate, values: Vec<f64>) -> Result<Self, SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        Ok(Self { start, values })
    }

    /// Returns the number of days covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series is empty (never, by construction).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the first date.
    pub fn start(&self) -> NoLeapDate {
        self.start
    }

    /// Returns the last date (inclusive).
    pub fn end(&self) -> NoLeapDate {
        self.start.plus_days(self.values.len() as i64 - 1)
    }

    /// Returns the date at index `i`.
    pub fn date_at(&self, i: usize) -> NoLeapDate {
        self.start.plus_days(i as i64)
    }

    /// Returns the index of `date`, or `None` if it lies outside the series.
    pub fn index_of(&self, date: NoLeapDate) -> Option<usize> {
        let offset = self.start.days_until(date);
        if offset < 0 || offset >= self.values.len() as i64 {
            None
        } else {
            Some(offset as usize)
        }
    }

    /// Returns the value for `date`, or `None` if it lies outside the series.
    pub fn get(&self, date: NoLeapDate) -> Option<f64> {
        self.index_of(date).map(|i| self.values[i])
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(date, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (NoLeapDate, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.date_at(i), v))
    }
}
