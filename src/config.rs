use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Helios configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HeliosConfig {
    /// Season settings.
    #[serde(default)]
    pub season: SeasonToml,

    /// Detection settings.
    #[serde(default)]
    pub detect: DetectToml,

    /// Injection settings.
    #[serde(default)]
    pub inject: InjectToml,

    /// Removal settings.
    #[serde(default)]
    pub remove: RemoveToml,
}

impl HeliosConfig {
    /// Loads the configuration from an optional TOML file path.
    ///
    /// With no path, every setting takes its default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonToml {
    /// Calendar months making up the analysis season.
    #[serde(default = "default_months")]
    pub months: Vec<u8>,
}

impl Default for SeasonToml {
    fn default() -> Self {
        Self {
            months: default_months(),
        }
    }
}

fn default_months() -> Vec<u8> {
    vec![6, 7, 8]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectToml {
    /// Percentile for the day-of-year threshold climatology.
    #[serde(default = "default_percentile")]
    pub percentile: f64,

    /// Minimum run length in days for an exceedance run to count.
    #[serde(default = "default_min_run_days")]
    pub min_run_days: usize,

    /// Inclusive `[first, last]` year range to scan. When absent, every
    /// year whose season the series fully covers is scanned.
    #[serde(default)]
    pub years: Option<[i32; 2]>,
}

impl Default for DetectToml {
    fn default() -> Self {
        Self {
            percentile: default_percentile(),
            min_run_days: default_min_run_days(),
            years: None,
        }
    }
}

fn default_percentile() -> f64 {
    90.0
}

fn default_min_run_days() -> usize {
    6
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectToml {
    /// Scale factor applied to injected signatures.
    #[serde(default = "default_magnitude")]
    pub magnitude: f64,
}

impl Default for InjectToml {
    fn default() -> Self {
        Self {
            magnitude: default_magnitude(),
        }
    }
}

fn default_magnitude() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RemoveToml {
    /// Companion forcing variables edited alongside the primary variable.
    #[serde(default)]
    pub companions: Vec<CompanionToml>,
}

/// One companion variable's series files.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanionToml {
    /// Variable name, used for logging only.
    pub variable: String,

    /// Path to the companion's hourly series Parquet file.
    pub input: PathBuf,

    /// Path for the companion's edited series Parquet file.
    pub output: PathBuf,
}
