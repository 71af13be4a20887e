//! Inject command: overlay a stored anomaly signature onto a baseline.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use helios_detect::Interval;
use helios_edit::inject_signature;
use helios_io::{parse_date, read_hourly, read_signature, write_hourly};

use crate::cli::InjectArgs;
use crate::config::HeliosConfig;

/// Run the injection pipeline.
pub fn run(args: InjectArgs) -> Result<()> {
    let _cmd = info_span!("inject").entered();
    let cfg = HeliosConfig::load(args.config.as_deref())?;

    let start = parse_date(&args.start).context("invalid --start")?;
    let end = parse_date(&args.end).context("invalid --end")?;
    let target = Interval::new(start, end).context("invalid target window")?;
    let magnitude = args.magnitude.unwrap_or(cfg.inject.magnitude);

    info!(path = %args.input.display(), "reading baseline series");
    let (mut hourly, meta) = read_hourly(&args.input)
        .with_context(|| format!("failed to read hourly series: {}", args.input.display()))?;

    let signature = read_signature(&args.signature)
        .with_context(|| format!("failed to read signature: {}", args.signature.display()))?;
    info!(
        source = %signature.source(),
        n_hours = signature.len(),
        "signature loaded"
    );

    inject_signature(&mut hourly, target, &signature, magnitude)
        .with_context(|| format!("injection failed for {target}"))?;
    info!(%target, magnitude, "signature injected");

    write_hourly(&args.output, &hourly, &meta)
        .with_context(|| format!("failed to write series: {}", args.output.display()))?;
    info!(path = %args.output.display(), "edited series written");

    Ok(())
}
