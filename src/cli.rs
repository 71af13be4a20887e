use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Helios heatwave detection and series editing.
#[derive(Parser)]
#[command(
    name = "helios",
    version,
    about = "Heatwave detection and counterfactual series editing"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Detect heatwave events against the day-of-year threshold climatology.
    Detect(DetectArgs),
    /// Remove detected events, overwriting them with typical values.
    Remove(RemoveArgs),
    /// Extract an event's anomaly signature to a file.
    Extract(ExtractArgs),
    /// Inject a stored anomaly signature into a baseline series.
    Inject(InjectArgs),
}

/// Arguments for the `detect` subcommand.
#[derive(clap::Args)]
pub struct DetectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to hourly series Parquet file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the detected event list JSON.
    #[arg(short, long)]
    pub events: PathBuf,
}

/// Arguments for the `remove` subcommand.
#[derive(clap::Args)]
pub struct RemoveArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to hourly series Parquet file for the primary variable.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the event list JSON produced by `detect`.
    #[arg(short, long)]
    pub events: PathBuf,

    /// Path for the edited primary series Parquet file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `extract` subcommand.
#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to hourly series Parquet file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// First day of the event interval, YYYY-MM-DD.
    #[arg(long)]
    pub start: String,

    /// Last day of the event interval (inclusive), YYYY-MM-DD.
    #[arg(long)]
    pub end: String,

    /// Path for the signature Parquet file.
    #[arg(short, long)]
    pub signature: PathBuf,
}

/// Arguments for the `inject` subcommand.
#[derive(clap::Args)]
pub struct InjectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to baseline hourly series Parquet file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the signature Parquet file produced by `extract`.
    #[arg(short, long)]
    pub signature: PathBuf,

    /// First day of the target window, YYYY-MM-DD.
    #[arg(long)]
    pub start: String,

    /// Last day of the target window (inclusive), YYYY-MM-DD.
    #[arg(long)]
    pub end: String,

    /// Scale factor applied to the signature; overrides the config value.
    #[arg(short, long)]
    pub magnitude: Option<f64>,

    /// Path for the edited series Parquet file.
    #[arg(short, long)]
    pub output: PathBuf,
}
