//! `heatmap` command: traffic-weighted samples for a density overlay.

use camino::Utf8PathBuf;
use chrono::{Local, Timelike};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parklah_core::{HeatmapSample, generate_heatmap_points};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalogue::load_catalogue;
use crate::output::write_json;
use crate::{ARG_CATALOGUE, ARG_HOUR, ARG_SEED, CliError, ENV_HEATMAP_CATALOGUE};

/// CLI arguments for the `heatmap` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "heatmap",
    long_about = "Generate weighted heatmap samples radiating from every \
                 spot along the compass bearings. Supplying a seed makes \
                 the jitter reproducible.",
    about = "Generate heatmap samples"
)]
#[ortho_config(prefix = "PARKLAH")]
pub(crate) struct HeatmapArgs {
    /// Path to the JSON parking catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Hour of day (0-23); later hours wrap. Defaults to the local hour.
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u32>,
    /// Seed for reproducible jitter.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl HeatmapArgs {
    pub(crate) fn into_config(self) -> Result<HeatmapConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HeatmapConfig::try_from(merged)
    }
}

/// Resolved `heatmap` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeatmapConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) hour: u32,
    pub(crate) seed: Option<u64>,
}

impl TryFrom<HeatmapArgs> for HeatmapConfig {
    type Error = CliError;

    fn try_from(args: HeatmapArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_HEATMAP_CATALOGUE,
        })?;
        Ok(Self {
            catalogue,
            hour: args.hour.unwrap_or_else(|| Local::now().hour()),
            seed: args.seed,
        })
    }
}

/// One heatmap sample in output form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct HeatmapPoint {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) weight: f64,
}

impl From<HeatmapSample> for HeatmapPoint {
    fn from(sample: HeatmapSample) -> Self {
        Self {
            lat: sample.location.y,
            lng: sample.location.x,
            weight: sample.weight,
        }
    }
}

pub(crate) fn execute_heatmap(config: &HeatmapConfig) -> Result<Vec<HeatmapPoint>, CliError> {
    let spots = load_catalogue(&config.catalogue)?;
    let samples = if let Some(seed) = config.seed {
        generate_heatmap_points(&spots, config.hour, &mut ChaCha8Rng::seed_from_u64(seed))
    } else {
        generate_heatmap_points(&spots, config.hour, &mut rand::thread_rng())
    };
    Ok(samples.into_iter().map(HeatmapPoint::from).collect())
}

pub(crate) fn run_heatmap(args: HeatmapArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let points = execute_heatmap(&config)?;
    write_json(writer, &points)
}
