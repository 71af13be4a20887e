//! Detect command: scan an hourly series for heatwave events.

use std::ops::RangeInclusive;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use helios_calendar::{NoLeapDate, Season};
use helios_climatology::ThresholdProfile;
use helios_detect::detect_events;
use helios_io::{read_hourly, write_events};
use helios_series::DailySeries;

use crate::cli::DetectArgs;
use crate::config::HeliosConfig;

/// Run the detection pipeline.
pub fn run(args: DetectArgs) -> Result<()> {
    let _cmd = info_span!("detect").entered();
    let cfg = HeliosConfig::load(args.config.as_deref())?;
    let season = Season::new(&cfg.season.months).context("invalid season months")?;

    info!(path = %args.input.display(), "reading hourly series");
    let (hourly, meta) = read_hourly(&args.input)
        .with_context(|| format!("failed to read hourly series: {}", args.input.display()))?;
    info!(
        n_hours = hourly.len(),
        variable = %meta.variable,
        "loaded hourly series"
    );

    let daily = hourly
        .daily_max()
        .context("failed to aggregate daily maxima")?;
    let threshold = ThresholdProfile::build(&daily, cfg.detect.percentile)
        .context("failed to build threshold climatology")?;

    let years = year_range(&cfg, &daily, &season)?;
    info!(
        first = *years.start(),
        last = *years.end(),
        "scanning years"
    );
    let events = detect_events(
        &daily,
        &threshold,
        &season,
        years,
        cfg.detect.min_run_days,
    )
    .context("detection failed")?;
    info!(n_events = events.len(), "detection complete");

    write_events(&args.events, &events)
        .with_context(|| format!("failed to write event list: {}", args.events.display()))?;
    info!(path = %args.events.display(), "event list written");

    Ok(())
}

/// Resolve the year range to scan: the configured range, or every year
/// whose season the series fully covers.
fn year_range(
    cfg: &HeliosConfig,
    daily: &DailySeries,
    season: &Season,
) -> Result<RangeInclusive<i32>> {
    if let Some([first, last]) = cfg.detect.years {
        if last < first {
            bail!("invalid year range: {first}..={last}");
        }
        return Ok(first..=last);
    }

    let doys = season.doys();
    let first_doy = *doys.first().expect("a season has at least one day");
    let last_doy = *doys.last().expect("a season has at least one day");

    // The series is contiguous, so the covered years form one run.
    let covered: Vec<i32> = (daily.start().year()..=daily.end().year())
        .filter(|&year| {
            daily.get(NoLeapDate::from_year_doy(year, first_doy)).is_some()
                && daily.get(NoLeapDate::from_year_doy(year, last_doy)).is_some()
        })
        .collect();

    match (covered.first(), covered.last()) {
        (Some(&first), Some(&last)) => Ok(first..=last),
        _ => bail!("series covers no complete season"),
    }
}
