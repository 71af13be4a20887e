//! End-to-end Builder -> Detector -> Merger scenario.

use helios_calendar::{NoLeapDate, Season};
use helios_climatology::ThresholdProfile;
use helios_detect::{detect_events, merge_intervals};
use helios_series::DailySeries;

const N_YEARS: usize = 24;
const START_YEAR: i32 = 2000;

/// Seasonal-cycle daily maximum for one day: a sinusoid over the year
/// plus a small deterministic year-to-year spread.
fn daily_max(year_offset: usize, doy_index: usize) -> f64 {
    let seasonal = 15.0 + 10.0 * (2.0 * std::f64::consts::PI * doy_index as f64 / 365.0).sin();
    // Spread 0.0..=0.4 with every fifth year repeating: the type-7 90th
    // percentile of each day-of-year group is seasonal + 0.4, which no
    // unbumped observation strictly exceeds.
    seasonal + 0.1 * (year_offset % 5) as f64
}

fn clean_series() -> DailySeries {
    let mut values = Vec::with_capacity(N_YEARS * 365);
    for y in 0..N_YEARS {
        for d in 0..365 {
            values.push(daily_max(y, d));
        }
    }
    DailySeries::new(NoLeapDate::new(START_YEAR, 1, 1).unwrap(), values).unwrap()
}

#[test]
fn synthetic_run_detected_once_and_only_once() {
    let clean = clean_series();
    let reference = ThresholdProfile::build(&clean, 90.0).unwrap();

    // Inject a 10-day run 5 units above the 90th percentile curve into
    // the summer of 2010.
    let run_start = NoLeapDate::new(2010, 7, 10).unwrap();
    let mut values = clean.values().to_vec();
    for offset in 0..10 {
        let date = run_start.plus_days(offset);
        let idx = clean.index_of(date).unwrap();
        values[idx] = reference.get(date.doy()).unwrap() + 5.0;
    }
    let bumped = DailySeries::new(clean.start(), values).unwrap();

    // Builder: a single high outlier per group does not move the 90th
    // percentile of a 24-sample group.
    let threshold = ThresholdProfile::build(&bumped, 90.0).unwrap();
    for d in 1..=365u16 {
        let doy = helios_calendar::Doy::new(d).unwrap();
        assert!(
            (threshold.get(doy).unwrap() - reference.get(doy).unwrap()).abs() < 1e-9,
            "threshold moved at doy {d}"
        );
    }

    // Detector + Merger.
    let season = Season::summer();
    let last_year = START_YEAR + N_YEARS as i32 - 1;
    let events = detect_events(&bumped, &threshold, &season, START_YEAR..=last_year, 6).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].year, 2010);

    let canonical = merge_intervals(&events.iter().map(|e| e.interval).collect::<Vec<_>>());
    assert_eq!(canonical.len(), 1);
    assert_eq!(canonical[0].start(), run_start);
    assert_eq!(canonical[0].end(), run_start.plus_days(9));
    assert_eq!(canonical[0].days(), 10);
}

#[test]
fn clean_series_has_no_events() {
    let clean = clean_series();
    let threshold = ThresholdProfile::build(&clean, 90.0).unwrap();
    let last_year = START_YEAR + N_YEARS as i32 - 1;
    let events = detect_events(
        &clean,
        &threshold,
        &Season::summer(),
        START_YEAR..=last_year,
        6,
    )
    .unwrap();
    assert!(events.is_empty());
}
