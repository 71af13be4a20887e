//! Run-length exceedance scan against a day-of-year threshold.

use helios_calendar::{NoLeapDate, Season};
use helios_climatology::ThresholdProfile;
use helios_series::DailySeries;
use tracing::{debug, instrument};

use crate::error::DetectError;
use crate::interval::Interval;

/// A candidate heatwave interval with the year whose scan produced it.
///
/// Candidates are not yet merged across years; see
/// [`merge_intervals`](crate::merge_intervals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedEvent {
    /// The exceedance run.
    pub interval: Interval,
    /// The scanned year that contributed the run.
    pub year: i32,
}

/// Scans each year's season days for runs of consecutive threshold
/// exceedance of at least `min_run_days`.
///
/// For every season day of every scanned year, the observed daily maximum
/// is compared (strictly greater) against the threshold keyed by that
/// day's actual day-of-year. A run broken by a non-exceeding day is
/// emitted if long enough; a run still active at the season's end is
/// flushed the same way. NaN observations never exceed and therefore
/// break runs.
///
/// Season days are scanned in ascending day-of-year order within each
/// calendar year, so runs do not connect across years.
///
/// # Errors
///
/// Returns [`DetectError::InvalidRunLength`] if `min_run_days` is zero,
/// [`DetectError::IncompleteSeason`] if a scanned year's season is not
/// fully covered by `daily`, or a wrapped
/// [`ClimatologyError`](helios_climatology::ClimatologyError) if the
/// threshold profile has no value for a season day.
#[instrument(skip(daily, threshold, season))]
pub fn detect_events(
    daily: &DailySeries,
    threshold: &ThresholdProfile,
    season: &Season,
    years: std::ops::RangeInclusive<i32>,
    min_run_days: usize,
) -> Result<Vec<DetectedEvent>, DetectError> {
    if min_run_days == 0 {
        return Err(DetectError::InvalidRunLength);
    }

    let doys = season.doys();
    let mut events = Vec::new();

    for year in years {
        let mut run_start: Option<NoLeapDate> = None;
        let mut run_len = 0usize;
        let mut previous: Option<NoLeapDate> = None;

        for &doy in &doys {
            let date = NoLeapDate::from_year_doy(year, doy);
            let value = daily
                .get(date)
                .ok_or(DetectError::IncompleteSeason { year, date })?;
            let limit = threshold.get(doy)?;

            if value > limit {
                if run_len == 0 {
                    run_start = Some(date);
                }
                run_len += 1;
            } else {
                if run_len >= min_run_days {
                    let start = run_start.expect("run_len > 0 implies a start");
                    let end = previous.expect("a broken run has a previous day");
                    events.push(DetectedEvent {
                        interval: Interval::new(start, end)?,
                        year,
                    });
                }
                run_len = 0;
                run_start = None;
            }
            previous = Some(date);
        }

        // Flush a run still active at the end of the season.
        if run_len >= min_run_days {
            let start = run_start.expect("run_len > 0 implies a start");
            let end = previous.expect("season has at least one day");
            events.push(DetectedEvent {
                interval: Interval::new(start, end)?,
                year,
            });
        }
    }

    debug!(n_events = events.len(), min_run_days, "exceedance scan done");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> NoLeapDate {
        NoLeapDate::new(y, m, d).unwrap()
    }

    /// Two years of daily data at `base`, with `(year, month, day, length,
    /// bump)` runs added on top.
    fn series_with_runs(
        start_year: i32,
        n_years: usize,
        base: f64,
        runs: &[(i32, u8, u8, usize, f64)],
    ) -> DailySeries {
        let mut values = vec![base; n_years * 365];
        let start = date(start_year, 1, 1);
        let daily = DailySeries::new(start, values.clone()).unwrap();
        for &(y, m, d, len, bump) in runs {
            let first = daily.index_of(date(y, m, d)).unwrap();
            for v in values[first..first + len].iter_mut() {
                *v += bump;
            }
        }
        DailySeries::new(start, values).unwrap()
    }

    /// Threshold built from two flat years at `base`: every doy threshold
    /// equals `base`, so only bumped days exceed it.
    fn flat_threshold(base: f64) -> ThresholdProfile {
        let daily = DailySeries::new(date(1990, 1, 1), vec![base; 2 * 365]).unwrap();
        ThresholdProfile::build(&daily, 90.0).unwrap()
    }

    #[test]
    fn run_of_exactly_k_is_found() {
        let daily = series_with_runs(2000, 2, 10.0, &[(2000, 7, 1, 6, 5.0)]);
        let threshold = flat_threshold(10.0);
        let events =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2001, 6).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].year, 2000);
        assert_eq!(events[0].interval.start(), date(2000, 7, 1));
        assert_eq!(events[0].interval.end(), date(2000, 7, 6));
        assert_eq!(events[0].interval.days(), 6);
    }

    #[test]
    fn run_of_k_minus_one_is_ignored() {
        let daily = series_with_runs(2000, 2, 10.0, &[(2000, 7, 1, 5, 5.0)]);
        let threshold = flat_threshold(10.0);
        let events =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2001, 6).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn run_at_season_end_is_flushed() {
        // Run covers the last 7 days of August; no breaking day follows.
        let daily = series_with_runs(2000, 2, 10.0, &[(2000, 8, 25, 7, 5.0)]);
        let threshold = flat_threshold(10.0);
        let events =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2000, 6).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].interval.start(), date(2000, 8, 25));
        assert_eq!(events[0].interval.end(), date(2000, 8, 31));
    }

    #[test]
    fn equal_to_threshold_does_not_exceed() {
        // Values equal to the threshold everywhere: no events.
        let daily = series_with_runs(2000, 2, 10.0, &[]);
        let threshold = flat_threshold(10.0);
        let events =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2001, 1).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn nan_breaks_a_run() {
        let mut daily = series_with_runs(2000, 2, 10.0, &[(2000, 7, 1, 13, 5.0)]);
        let mut values = daily.values().to_vec();
        let mid = daily.index_of(date(2000, 7, 7)).unwrap();
        values[mid] = f64::NAN;
        daily = DailySeries::new(daily.start(), values).unwrap();

        let threshold = flat_threshold(10.0);
        let events =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2000, 6).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].interval.end(), date(2000, 7, 6));
        assert_eq!(events[1].interval.start(), date(2000, 7, 8));
    }

    #[test]
    fn runs_reported_per_year() {
        let daily = series_with_runs(
            2000,
            2,
            10.0,
            &[(2000, 6, 10, 8, 5.0), (2001, 8, 1, 6, 5.0)],
        );
        let threshold = flat_threshold(10.0);
        let events =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2001, 6).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].year, 2000);
        assert_eq!(events[1].year, 2001);
    }

    #[test]
    fn zero_min_run_rejected() {
        let daily = series_with_runs(2000, 2, 10.0, &[]);
        let threshold = flat_threshold(10.0);
        let err =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2000, 0).unwrap_err();
        assert_eq!(err, DetectError::InvalidRunLength);
    }

    #[test]
    fn missing_season_day_errors() {
        // Series ends mid-August of its final year.
        let values = vec![10.0; 365 + 200];
        let daily = DailySeries::new(date(2000, 1, 1), values).unwrap();
        let threshold = flat_threshold(10.0);
        let err =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2001, 6).unwrap_err();
        assert!(matches!(
            err,
            DetectError::IncompleteSeason { year: 2001, .. }
        ));
    }

    #[test]
    fn missing_threshold_entry_errors() {
        // Threshold built from June-only data cannot cover July scans.
        let mut values = vec![f64::NAN; 2 * 365];
        let base = DailySeries::new(date(1990, 1, 1), vec![0.0; 2 * 365]).unwrap();
        for year in [1990, 1991] {
            for d in 1..=30u8 {
                let idx = base.index_of(date(year, 6, d)).unwrap();
                values[idx] = 10.0;
            }
        }
        let june_only = DailySeries::new(date(1990, 1, 1), values).unwrap();
        let threshold = ThresholdProfile::build(&june_only, 90.0).unwrap();

        let daily = series_with_runs(2000, 2, 10.0, &[]);
        let err =
            detect_events(&daily, &threshold, &Season::summer(), 2000..=2000, 6).unwrap_err();
        assert!(matches!(err, DetectError::Profile(_)));
    }
}
