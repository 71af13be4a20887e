//! Event removal: overwrite event hours with a typical profile.

use helios_calendar::HourStamp;
use helios_climatology::{BestDayProfile, DiurnalProfile};
use helios_detect::Interval;
use helios_series::HourlySeries;
use tracing::{debug, instrument};

use crate::error::EditError;

/// Source of replacement values for removed event hours.
///
/// The primary variable is replaced by its (day-of-year, hour)-keyed
/// diurnal median; companion forcing variables are replaced by a single
/// best-matching observed day, tiled across each removed day. Callers
/// pick one deliberately.
#[derive(Debug, Clone, Copy)]
pub enum Replacement<'a> {
    /// Day-of-year keyed diurnal median profile.
    Diurnal(&'a DiurnalProfile),
    /// Fixed 24-hour best-day profile, tiled per removed day.
    BestDay(&'a BestDayProfile),
}

impl Replacement<'_> {
    fn value(&self, stamp: HourStamp) -> Result<f64, EditError> {
        match self {
            Replacement::Diurnal(profile) => {
                Ok(profile.get(stamp.date().doy(), stamp.hour())?)
            }
            Replacement::BestDay(profile) => Ok(profile.get(stamp.hour())?),
        }
    }
}

/// Overwrites every hour inside every event interval with the replacement
/// profile's value, in place. Samples outside all intervals are untouched.
///
/// Returns the number of hours overwritten.
///
/// # Errors
///
/// Returns [`EditError::IntervalOutsideSeries`] if any interval is not
/// fully covered by the series, or [`EditError::Profile`] if the
/// replacement profile has no value for a required hour. The series is
/// not modified when an error is returned.
#[instrument(skip(hourly, events, replacement))]
pub fn remove_events(
    hourly: &mut HourlySeries,
    events: &[Interval],
    replacement: Replacement<'_>,
) -> Result<usize, EditError> {
    // Resolve all replacement values before touching the series, so a
    // failure cannot leave a half-edited result.
    let mut edits: Vec<(usize, f64)> = Vec::new();
    for &interval in events {
        let first = HourStamp::start_of_day(interval.start());
        let n_hours = interval.hours() as usize;
        let first_idx = hourly
            .index_of(first)
            .filter(|&i| i + n_hours <= hourly.len())
            .ok_or(EditError::IntervalOutsideSeries { interval })?;
        for offset in 0..n_hours {
            let stamp = first.plus_hours(offset as i64);
            edits.push((first_idx + offset, replacement.value(stamp)?));
        }
    }

    let values = hourly.values_mut();
    for &(idx, value) in &edits {
        values[idx] = value;
    }

    debug!(
        n_events = events.len(),
        n_hours = edits.len(),
        "events removed"
    );
    Ok(edits.len())
}
