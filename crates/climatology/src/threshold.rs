//! Day-of-year percentile threshold profile.

use std::collections::BTreeSet;

use helios_calendar::Doy;
use helios_series::DailySeries;
use tracing::debug;

use crate::error::ClimatologyError;

/// A per-day-of-year scalar statistic, typically the 90th percentile of
/// daily maximum temperature across years.
///
/// Entries exist only for days-of-year that appear in the source series;
/// looking up an absent entry is an error, never a silent default.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdProfile {
    values: Vec<Option<f64>>,
    percentile: f64,
}

impl ThresholdProfile {
    /// Builds the profile from a multi-year daily series.
    ///
    /// Values are grouped by day-of-year across all years and the type-7
    /// percentile is taken per group. NaN observations are skipped. Group
    /// sizes may be ragged.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::InvalidPercentile`] if `percentile` is
    /// outside 0..=100, or [`ClimatologyError::InsufficientData`] if any
    /// populated day-of-year group draws finite observations from fewer
    /// than two distinct years.
    pub fn build(daily: &DailySeries, percentile: f64) -> Result<Self, ClimatologyError> {
        if !(0.0..=100.0).contains(&percentile) || !percentile.is_finite() {
            return Err(ClimatologyError::InvalidPercentile { percentile });
        }

        let mut groups: Vec<Vec<f64>> = vec![Vec::new(); 365];
        let mut group_years: Vec<BTreeSet<i32>> = vec![BTreeSet::new(); 365];
        for (date, value) in daily.iter() {
            if value.is_nan() {
                continue;
            }
            let idx = date.doy().index();
            groups[idx].push(value);
            group_years[idx].insert(date.year());
        }

        let mut values = vec![None; 365];
        for (idx, group) in groups.iter().enumerate() {
            if group.is_empty() {
                continue;
            }
            let n_years = group_years[idx].len();
            if n_years < 2 {
                return Err(ClimatologyError::InsufficientData {
                    doy: Doy::new(idx as u16 + 1).expect("index 0..365 maps to valid doy"),
                    hour: None,
                    n_years,
                });
            }
            values[idx] = Some(helios_stats::quantile(group, percentile / 100.0));
        }

        let n_defined = values.iter().filter(|v| v.is_some()).count();
        debug!(percentile, n_defined, "threshold profile built");
        Ok(Self { values, percentile })
    }

    /// Returns the percentile this profile was built with.
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Returns `true` if the profile has a value for `doy`.
    pub fn contains(&self, doy: Doy) -> bool {
        self.values[doy.index()].is_some()
    }

    /// Returns the threshold for `doy`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::UndefinedLookup`] if the profile has no
    /// value for `doy`.
    pub fn get(&self, doy: Doy) -> Result<f64, ClimatologyError> {
        self.values[doy.index()].ok_or(ClimatologyError::UndefinedLookup { doy, hour: None })
    }
}
