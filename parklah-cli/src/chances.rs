//! `chances` command: time-adjusted availability for every spot.

use camino::Utf8PathBuf;
use chrono::{Local, Timelike};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parklah_core::{ChanceBand, available_spots, current_success_rate, day_progress_percent};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalogue::load_catalogue;
use crate::output::write_json;
use crate::{ARG_CATALOGUE, ARG_HOUR, CliError, ENV_CHANCES_CATALOGUE};

/// CLI arguments for the `chances` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "chances",
    long_about = "Estimate the chance of finding a free bay at each spot \
                 for the given hour, defaulting to the local time.",
    about = "Estimate bay availability"
)]
#[ortho_config(prefix = "PARKLAH")]
pub(crate) struct ChancesArgs {
    /// Path to the JSON parking catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Hour of day (0-23); later hours wrap. Defaults to the local hour.
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u32>,
}

impl ChancesArgs {
    pub(crate) fn into_config(self) -> Result<ChancesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ChancesConfig::try_from(merged)
    }
}

/// Resolved `chances` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChancesConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
}

impl TryFrom<ChancesArgs> for ChancesConfig {
    type Error = CliError;

    fn try_from(args: ChancesArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_CHANCES_CATALOGUE,
        })?;
        let (hour, minute) = match args.hour {
            Some(hour) => (hour, 0),
            None => {
                let now = Local::now();
                (now.hour(), now.minute())
            }
        };
        Ok(Self {
            catalogue,
            hour,
            minute,
        })
    }
}

/// `chances` output: the clock position plus one report per spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChancesReport {
    pub(crate) hour: u32,
    pub(crate) day_progress_percent: f64,
    pub(crate) spots: Vec<SpotChance>,
}

/// Availability estimate for one spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpotChance {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) success_rate: i32,
    pub(crate) band: ChanceBand,
    pub(crate) available_spots: i32,
}

pub(crate) fn execute_chances(config: &ChancesConfig) -> Result<ChancesReport, CliError> {
    let spots = load_catalogue(&config.catalogue)?
        .into_iter()
        .map(|poi| {
            let success_rate = current_success_rate(&poi, config.hour);
            SpotChance {
                success_rate,
                band: ChanceBand::from_rate(success_rate),
                available_spots: available_spots(&poi, config.hour),
                id: poi.id,
                name: poi.name,
            }
        })
        .collect();
    Ok(ChancesReport {
        hour: config.hour,
        day_progress_percent: day_progress_percent(config.hour, config.minute),
        spots,
    })
}

pub(crate) fn run_chances(args: ChancesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_chances(&config)?;
    write_json(writer, &report)
}
