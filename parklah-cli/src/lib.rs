//! Command-line interface for querying a `ParkLah` parking catalogue.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;

mod catalogue;
mod chances;
mod error;
mod fs;
mod heatmap;
mod location;
mod output;
mod rank;

pub use error::CliError;

use chances::ChancesArgs;
use heatmap::HeatmapArgs;
use rank::{NearbyArgs, RankArgs};

const ARG_CATALOGUE: &str = "catalogue";
const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_MODE: &str = "mode";
const ARG_FILTER: &str = "filter";
const ARG_SEARCH: &str = "search";
const ARG_RADIUS_KM: &str = "radius-km";
const ARG_HOUR: &str = "hour";
const ARG_SEED: &str = "seed";
const ENV_RANK_CATALOGUE: &str = "PARKLAH_CMDS_RANK_CATALOGUE";
const ENV_NEARBY_CATALOGUE: &str = "PARKLAH_CMDS_NEARBY_CATALOGUE";
const ENV_NEARBY_LAT: &str = "PARKLAH_CMDS_NEARBY_LAT";
const ENV_NEARBY_LNG: &str = "PARKLAH_CMDS_NEARBY_LNG";
const ENV_CHANCES_CATALOGUE: &str = "PARKLAH_CMDS_CHANCES_CATALOGUE";
const ENV_HEATMAP_CATALOGUE: &str = "PARKLAH_CMDS_HEATMAP_CATALOGUE";

/// Run the `ParkLah` CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => rank::run_rank(args, writer),
        Command::Nearby(args) => rank::run_nearby(args, writer),
        Command::Chances(args) => chances::run_chances(args, writer),
        Command::Heatmap(args) => heatmap::run_heatmap(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "parklah",
    about = "Rank parking spots, estimate bay availability and sample traffic heatmaps",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every spot in the catalogue by distance from the user.
    Rank(RankArgs),
    /// List spots within a radius of the user.
    Nearby(NearbyArgs),
    /// Estimate the chance of finding a bay at each spot.
    Chances(ChancesArgs),
    /// Generate traffic-weighted heatmap samples.
    Heatmap(HeatmapArgs),
}

#[cfg(test)]
mod tests;
