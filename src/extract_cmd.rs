//! Extract command: write an event's anomaly signature to a file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use helios_calendar::Season;
use helios_climatology::DiurnalProfile;
use helios_detect::Interval;
use helios_edit::AnomalySignature;
use helios_io::{parse_date, read_hourly, write_signature};

use crate::cli::ExtractArgs;
use crate::config::HeliosConfig;

/// Run the signature extraction pipeline.
pub fn run(args: ExtractArgs) -> Result<()> {
    let _cmd = info_span!("extract").entered();
    let cfg = HeliosConfig::load(args.config.as_deref())?;
    let season = Season::new(&cfg.season.months).context("invalid season months")?;

    let start = parse_date(&args.start).context("invalid --start")?;
    let end = parse_date(&args.end).context("invalid --end")?;
    let interval = Interval::new(start, end).context("invalid event interval")?;

    info!(path = %args.input.display(), "reading hourly series");
    let (hourly, _meta) = read_hourly(&args.input)
        .with_context(|| format!("failed to read hourly series: {}", args.input.display()))?;

    let diurnal =
        DiurnalProfile::build(&hourly, &season).context("failed to build diurnal climatology")?;
    let signature = AnomalySignature::extract(&hourly, interval, &diurnal)
        .with_context(|| format!("failed to extract signature for {interval}"))?;
    info!(source = %signature.source(), n_hours = signature.len(), "signature extracted");

    write_signature(&args.signature, &signature)
        .with_context(|| format!("failed to write signature: {}", args.signature.display()))?;
    info!(path = %args.signature.display(), "signature written");

    Ok(())
}
