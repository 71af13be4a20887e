//! Hourly-resolution series with implied hour grid.

use helios_calendar::{HourStamp, NoLeapDate};

use crate::daily::DailySeries;
use crate::error::SeriesError;

/// A contiguous hourly series: one value per hour starting at `start`.
///
/// Timestamps are implied by index, so the grid is strictly increasing
/// with a fixed one-hour step by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    start: HourStamp,
    values: Vec<f64>,
}

impl HourlySeries {
    /// Creates an hourly series starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyData`] if `values` is empty.
    pub fn new(start: HourStamp, values: Vec<f64>) -> Result<Self, SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        Ok(Self { start, values })
    }

    /// Returns the number of hours covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series is empty (never, by construction).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the first stamp.
    pub fn start(&self) -> HourStamp {
        self.start
    }

    /// Returns the last stamp (inclusive).
    pub fn end(&self) -> HourStamp {
        self.start.plus_hours(self.values.len() as i64 - 1)
    }

    /// Returns the stamp at index `i`.
    pub fn stamp_at(&self, i: usize) -> HourStamp {
        self.start.plus_hours(i as i64)
    }

    /// Returns the index of `stamp`, or `None` if it lies outside the series.
    pub fn index_of(&self, stamp: HourStamp) -> Option<usize> {
        let offset = self.start.hours_until(stamp);
        if offset < 0 || offset >= self.values.len() as i64 {
            None
        } else {
            Some(offset as usize)
        }
    }

    /// Returns the value for `stamp`, or `None` if it lies outside the series.
    pub fn get(&self, stamp: HourStamp) -> Option<f64> {
        self.index_of(stamp).map(|i| self.values[i])
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns mutable access to the values for in-place editing.
    ///
    /// The grid cannot change through this; only values can.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Iterates over `(stamp, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (HourStamp, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.stamp_at(i), v))
    }

    /// Returns `true` if the series starts at hour 0 and covers whole days.
    pub fn is_day_aligned(&self) -> bool {
        self.start.hour() == 0 && self.values.len() % 24 == 0
    }

    /// Aggregates to a daily series of per-day maxima.
    ///
    /// NaN samples are ignored within a day; a day of only NaN samples
    /// yields NaN.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotDayAligned`] unless the series starts at
    /// hour 0 and its length is a multiple of 24.
    pub fn daily_max(&self) -> Result<DailySeries, SeriesError> {
        if !self.is_day_aligned() {
            return Err(SeriesError::NotDayAligned {
                start_hour: self.start.hour(),
                n_values: self.values.len(),
            });
        }
        let maxima: Vec<f64> = self
            .values
            .chunks_exact(24)
            .map(|day| {
                let max = day.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                if max.is_finite() { max } else { f64::NAN }
            })
            .collect();
        DailySeries::new(self.start.date(), maxima)
    }
}

/// Convenience constructor: hourly series covering whole days from `start`.
///
/// # Errors
///
/// Returns [`SeriesError::EmptyData`] if `values` is empty, or
/// [`SeriesError::NotDayAligned`] if its length is not a multiple of 24.
pub fn hourly_from_days(start: NoLeapDate, values: Vec<f64>) -> Result<HourlySeries, SeriesError> {
    if values.is_empty() {
        return Err(SeriesError::EmptyData);
    }
    if values.len() % 24 != 0 {
        return Err(SeriesError::NotDayAligned {
            start_hour: 0,
            n_values: values.len(),
        });
    }
    HourlySeries::new(HourStamp::start_of_day(start), values)
}
