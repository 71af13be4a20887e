//! Remove command: overwrite detected events with typical values.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use helios_calendar::Season;
use helios_climatology::{BestDayProfile, DiurnalProfile};
use helios_detect::merge_intervals;
use helios_edit::{Replacement, remove_events};
use helios_io::{read_events, read_hourly, write_hourly};

use crate::cli::RemoveArgs;
use crate::config::{CompanionToml, HeliosConfig};

/// Run the removal pipeline over the primary variable and every
/// configured companion variable.
pub fn run(args: RemoveArgs) -> Result<()> {
    let _cmd = info_span!("remove").entered();
    let cfg = HeliosConfig::load(args.config.as_deref())?;
    let season = Season::new(&cfg.season.months).context("invalid season months")?;

    let events = read_events(&args.events)
        .with_context(|| format!("failed to read event list: {}", args.events.display()))?;
    let intervals: Vec<_> = events.iter().map(|e| e.interval).collect();
    let canonical = merge_intervals(&intervals);
    info!(
        n_events = events.len(),
        n_merged = canonical.len(),
        "event list loaded"
    );

    // Primary variable: per-(day-of-year, hour) diurnal replacement.
    info!(path = %args.input.display(), "reading primary series");
    let (mut hourly, meta) = read_hourly(&args.input)
        .with_context(|| format!("failed to read hourly series: {}", args.input.display()))?;
    let diurnal =
        DiurnalProfile::build(&hourly, &season).context("failed to build diurnal climatology")?;
    let n_replaced = remove_events(&mut hourly, &canonical, Replacement::Diurnal(&diurnal))
        .context("removal failed for primary variable")?;
    info!(n_hours = n_replaced, "primary variable edited");

    write_hourly(&args.output, &hourly, &meta)
        .with_context(|| format!("failed to write series: {}", args.output.display()))?;
    info!(path = %args.output.display(), "edited primary series written");

    // Companion variables: fixed best-day replacement.
    for companion in &cfg.remove.companions {
        remove_companion(companion, &canonical, &season)?;
    }

    Ok(())
}

fn remove_companion(
    companion: &CompanionToml,
    canonical: &[helios_detect::Interval],
    season: &Season,
) -> Result<()> {
    let _var = info_span!("companion", variable = %companion.variable).entered();

    info!(path = %companion.input.display(), "reading companion series");
    let (mut series, meta) = read_hourly(&companion.input).with_context(|| {
        format!(
            "failed to read series for '{}': {}",
            companion.variable,
            companion.input.display()
        )
    })?;

    let diurnal = DiurnalProfile::build(&series, season).with_context(|| {
        format!(
            "failed to build diurnal climatology for '{}'",
            companion.variable
        )
    })?;
    let best = BestDayProfile::select(&series, season, &diurnal).with_context(|| {
        format!(
            "failed to select best-day profile for '{}'",
            companion.variable
        )
    })?;
    info!(date = %best.date(), msd = best.msd(), "best-day profile selected");

    let n_replaced = remove_events(&mut series, canonical, Replacement::BestDay(&best))
        .with_context(|| format!("removal failed for '{}'", companion.variable))?;
    info!(n_hours = n_replaced, "companion variable edited");

    write_hourly(&companion.output, &series, &meta).with_context(|| {
        format!(
            "failed to write series for '{}': {}",
            companion.variable,
            companion.output.display()
        )
    })?;
    info!(path = %companion.output.display(), "edited companion series written");

    Ok(())
}
