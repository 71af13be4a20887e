//! Best-day replacement profile selection.

use helios_calendar::{HourStamp, NoLeapDate, Season};
use helios_series::HourlySeries;
use tracing::debug;

use crate::diurnal::DiurnalProfile;
use crate::error::ClimatologyError;

/// The single observed 24-hour cycle closest to the variable's own diurnal
/// median, used as a generic replacement for companion forcing variables.
#[derive(Debug, Clone, PartialEq)]
pub struct BestDayProfile {
    date: NoLeapDate,
    values: [f64; 24],
    msd: f64,
}

impl BestDayProfile {
    /// Scans all complete season days of `hourly` and selects the one with
    /// the lowest mean squared deviation from `diurnal` at that day's own
    /// (day-of-year, hour) keys.
    ///
    /// Days with any NaN sample or any absent diurnal entry are skipped as
    /// candidates.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::NoCandidateDay`] if no complete,
    /// fully-defined season day exists.
    pub fn select(
        hourly: &HourlySeries,
        season: &Season,
        diurnal: &DiurnalProfile,
    ) -> Result<Self, ClimatologyError> {
        let mut best: Option<(NoLeapDate, [f64; 24], f64)> = None;

        let mut date = hourly.start().date();
        // Start at the first date whose hour 0 is inside the series.
        if hourly.start().hour() != 0 {
            date = date.next();
        }
        let last = hourly.end().date();

        while date <= last {
            if season.contains(date.doy()) {
                if let Some(candidate) = day_slice(hourly, date) {
                    if let Ok(reference) = diurnal.day_values(date.doy()) {
                        let msd = helios_stats::mean_squared_deviation(&candidate, &reference);
                        let better = match &best {
                            Some((_, _, best_msd)) => msd < *best_msd,
                            None => true,
                        };
                        if better {
                            best = Some((date, candidate, msd));
                        }
                    }
                }
            }
            date = date.next();
        }

        match best {
            Some((date, values, msd)) => {
                debug!(%date, msd, "best day selected");
                Ok(Self { date, values, msd })
            }
            None => Err(ClimatologyError::NoCandidateDay),
        }
    }

    /// Returns the date of the selected day.
    pub fn date(&self) -> NoLeapDate {
        self.date
    }

    /// Returns the 24 hourly values of the selected day.
    pub fn values(&self) -> &[f64; 24] {
        &self.values
    }

    /// Returns the value at the given hour of day.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::UndefinedLookup`] if `hour` is not in
    /// 0..=23.
    pub fn get(&self, hour: u8) -> Result<f64, ClimatologyError> {
        if hour < 24 {
            Ok(self.values[hour as usize])
        } else {
            Err(ClimatologyError::UndefinedLookup {
                doy: self.date.doy(),
                hour: Some(hour),
            })
        }
    }

    /// Returns the mean squared deviation of the selected day from the
    /// diurnal profile.
    pub fn msd(&self) -> f64 {
        self.msd
    }
}

/// Returns the 24 values of `date` if the series fully covers it with
/// finite samples.
fn day_slice(hourly: &HourlySeries, date: NoLeapDate) -> Option<[f64; 24]> {
    let first = hourly.index_of(HourStamp::start_of_day(date))?;
    if first + 24 > hourly.len() {
        return None;
    }
    let slice = &hourly.values()[first..first + 24];
    if slice.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let mut day = [0.0; 24];
    day.copy_from_slice(slice);
    Some(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use helios_calendar::Season;
    use helios_series::hourly_from_days;

    fn date(y: i32, m: u8, d: u8) -> NoLeapDate {
        NoLeapDate::new(y, m, d).unwrap()
    }

    /// Two flat years with one slightly disturbed day and one strongly
    /// disturbed day in the first summer.
    fn fixture() -> (HourlySeries, DiurnalProfile) {
        let mut values = Vec::new();
        for y in 0..2 {
            for d in 0..365 {
                for h in 0..24 {
                    let base = 10.0 + h as f64 / 10.0;
                    let offset = match (y, d) {
                        // Day index 161 = 2000-06-11, 0.1 high.
                        (0, 161) => 0.1,
                        // Day index 185 = 2000-07-05, 5.0 high.
                        (0, 185) => 5.0,
                        _ => 0.0,
                    };
                    values.push(base + offset);
                }
            }
        }
        let hourly = hourly_from_days(date(2000, 1, 1), values).unwrap();
        let diurnal = DiurnalProfile::build(&hourly, &Season::summer()).unwrap();
        (hourly, diurnal)
    }

    #[test]
    fn picks_lowest_msd_day() {
        let (hourly, diurnal) = fixture();
        let best = BestDayProfile::select(&hourly, &Season::summer(), &diurnal).unwrap();
        // Every undisturbed summer day has MSD 0 against the median; the
        // first such day wins.
        assert_eq!(best.date(), date(2000, 6, 1));
        assert_relative_eq!(best.msd(), 0.0);
        assert_relative_eq!(best.values()[23], 12.3);
        assert_relative_eq!(best.get(23).unwrap(), 12.3);
    }

    #[test]
    fn prefers_near_median_over_far() {
        // Restrict the scan to a window holding only the two disturbed
        // days, so the 0.1-offset day must win over the 5.0-offset day.
        let (hourly, diurnal) = fixture();
        let start_idx = hourly
            .index_of(HourStamp::start_of_day(date(2000, 6, 11)))
            .unwrap();
        let mut window = hourly.values()[start_idx..start_idx + 24].to_vec();
        let far_idx = hourly
            .index_of(HourStamp::start_of_day(date(2000, 7, 5)))
            .unwrap();
        window.extend_from_slice(&hourly.values()[far_idx..far_idx + 24]);
        // Rebuild as two consecutive summer days.
        let narrow = hourly_from_days(date(2000, 6, 11), window).unwrap();

        let best = BestDayProfile::select(&narrow, &Season::summer(), &diurnal).unwrap();
        assert_eq!(best.date(), date(2000, 6, 11));
        // The June 11 median is base + 0.05 (two samples: base and
        // base + 0.1), so the disturbed day deviates by 0.05 per hour.
        assert_relative_eq!(best.msd(), 0.05 * 0.05, epsilon = 1e-12);
    }

    #[test]
    fn skips_days_with_nan() {
        let mut values = vec![10.0; 2 * 365 * 24];
        let hourly = hourly_from_days(date(2000, 1, 1), values.clone()).unwrap();
        let diurnal = DiurnalProfile::build(&hourly, &Season::summer()).unwrap();

        // Poison the first summer day of year one; selection moves on.
        let idx = hourly
            .index_of(HourStamp::start_of_day(date(2000, 6, 1)))
            .unwrap();
        values[idx + 12] = f64::NAN;
        let poisoned = hourly_from_days(date(2000, 1, 1), values).unwrap();

        let best = BestDayProfile::select(&poisoned, &Season::summer(), &diurnal).unwrap();
        assert_eq!(best.date(), date(2000, 6, 2));
    }

    #[test]
    fn no_candidate_day_errors() {
        // Series with no summer coverage at all.
        let values = vec![1.0; 10 * 24];
        let hourly = hourly_from_days(date(2000, 1, 1), values).unwrap();
        let (_, diurnal) = fixture();
        let err = BestDayProfile::select(&hourly, &Season::summer(), &diurnal).unwrap_err();
        assert_eq!(err, ClimatologyError::NoCandidateDay);
    }

    #[test]
    fn get_rejects_hour_24() {
        let (hourly, diurnal) = fixture();
        let best = BestDayProfile::select(&hourly, &Season::summer(), &diurnal).unwrap();
        assert!(best.get(24).is_err());
    }
}
