//! Seasonal hourly median diurnal profile.

use std::collections::BTreeSet;

use helios_calendar::{Doy, Season};
use helios_series::HourlySeries;
use tracing::debug;

use crate::error::ClimatologyError;

/// Median value per (day-of-year, hour-of-day), computed across years from
/// a restricted season.
///
/// This is the "climatologically typical" diurnal cycle used both as the
/// reference for anomaly extraction and as the replacement source when
/// removing events from the primary variable.
#[derive(Debug, Clone, PartialEq)]
pub struct DiurnalProfile {
    // Indexed by doy.index() * 24 + hour.
    values: Vec<Option<f64>>,
}

impl DiurnalProfile {
    /// Builds the profile from a multi-year hourly series, restricted to
    /// season hours.
    ///
    /// Observations are grouped by (day-of-year, hour) and the median is
    /// taken per group. NaN observations are skipped. Group sizes may be
    /// ragged.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::InsufficientData`] if any populated
    /// group draws finite observations from fewer than two distinct years.
    pub fn build(hourly: &HourlySeries, season: &Season) -> Result<Self, ClimatologyError> {
        let mut groups: Vec<Vec<f64>> = vec![Vec::new(); 365 * 24];
        let mut group_years: Vec<BTreeSet<i32>> = vec![BTreeSet::new(); 365 * 24];

        for (stamp, value) in hourly.iter() {
            if value.is_nan() || !season.contains(stamp.date().doy()) {
                continue;
            }
            let idx = stamp.date().doy().index() * 24 + stamp.hour() as usize;
            groups[idx].push(value);
            group_years[idx].insert(stamp.date().year());
        }

        let mut values = vec![None; 365 * 24];
        for (idx, group) in groups.iter().enumerate() {
            if group.is_empty() {
                continue;
            }
            let n_years = group_years[idx].len();
            if n_years < 2 {
                return Err(ClimatologyError::InsufficientData {
                    doy: Doy::new((idx / 24) as u16 + 1).expect("index maps to valid doy"),
                    hour: Some((idx % 24) as u8),
                    n_years,
                });
            }
            values[idx] = Some(helios_stats::median(group));
        }

        let n_defined = values.iter().filter(|v| v.is_some()).count();
        debug!(n_defined, "diurnal profile built");
        Ok(Self { values })
    }

    /// Returns `true` if the profile has a value for `(doy, hour)`.
    pub fn contains(&self, doy: Doy, hour: u8) -> bool {
        hour < 24 && self.values[doy.index() * 24 + hour as usize].is_some()
    }

    /// Returns the median value for `(doy, hour)`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::UndefinedLookup`] if the profile has no
    /// value for the pair.
    pub fn get(&self, doy: Doy, hour: u8) -> Result<f64, ClimatologyError> {
        if hour < 24 {
            if let Some(v) = self.values[doy.index() * 24 + hour as usize] {
                return Ok(v);
            }
        }
        Err(ClimatologyError::UndefinedLookup {
            doy,
            hour: Some(hour),
        })
    }

    /// Returns all 24 hourly values for `doy`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::UndefinedLookup`] for the first absent
    /// hour, if any.
    pub fn day_values(&self, doy: Doy) -> Result<[f64; 24], ClimatologyError> {
        let mut day = [0.0; 24];
        for (hour, slot) in day.iter_mut().enumerate() {
            *slot = self.get(doy, hour as u8)?;
        }
        Ok(day)
    }
}
