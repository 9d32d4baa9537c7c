//! `rank` and `nearby` commands: spots ordered by distance from the user.

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use parklah_core::{
    AnnotatedPoint, DEFAULT_NEARBY_RADIUS_KM, SpotFilter, TravelMode, format_distance,
    rank_by_proximity_for_mode, search_spots, spots_within_radius,
};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalogue::load_catalogue;
use crate::location::{optional_origin, origin};
use crate::output::write_json;
use crate::{
    ARG_CATALOGUE, ARG_FILTER, ARG_LAT, ARG_LNG, ARG_MODE, ARG_RADIUS_KM, ARG_SEARCH, CliError,
    ENV_NEARBY_CATALOGUE, ENV_NEARBY_LAT, ENV_NEARBY_LNG, ENV_RANK_CATALOGUE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank every spot in the catalogue by great-circle distance \
                 from the user. Without a location every spot reports the \
                 no-fix sentinel distance and catalogue order is kept. \
                 --filter and --search narrow the list before ranking.",
    about = "Rank spots by distance"
)]
#[ortho_config(prefix = "PARKLAH")]
pub(crate) struct RankArgs {
    /// Path to the JSON parking catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// User latitude in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// User longitude in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Travel mode for time estimates: driving, walking or transit.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Which spots to list: all, legal, illegal or high-chance.
    #[arg(long = ARG_FILTER, value_name = "filter")]
    #[serde(default)]
    pub(crate) filter: Option<String>,
    /// Only list spots whose name or address contains this text.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) origin: Option<Coord<f64>>,
    pub(crate) mode: TravelMode,
    pub(crate) filter: SpotFilter,
    pub(crate) search: String,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_RANK_CATALOGUE,
        })?;
        let origin = optional_origin(args.lat, args.lng)?;
        let mode = args
            .mode
            .as_deref()
            .map(str::parse::<TravelMode>)
            .transpose()?
            .unwrap_or_default();
        let filter = args
            .filter
            .as_deref()
            .map(str::parse::<SpotFilter>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            catalogue,
            origin,
            mode,
            filter,
            search: args.search.unwrap_or_default(),
        })
    }
}

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "nearby",
    long_about = "List the spots within a radius of the user, nearest \
                 first, with driving time estimates.",
    about = "List spots near the user"
)]
#[ortho_config(prefix = "PARKLAH")]
pub(crate) struct NearbyArgs {
    /// Path to the JSON parking catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// User latitude in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// User longitude in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius in kilometres (default 2).
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) origin: Coord<f64>,
    pub(crate) radius_km: f64,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_NEARBY_CATALOGUE,
        })?;
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_NEARBY_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_NEARBY_LNG,
        })?;
        let radius_km = args.radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
        if !(radius_km.is_finite() && radius_km >= 0.0) {
            return Err(CliError::InvalidRadius { radius: radius_km });
        }
        Ok(Self {
            catalogue,
            origin: origin(lat, lng)?,
            radius_km,
        })
    }
}

/// One line of `rank` or `nearby` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankedSpot {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) is_legal: bool,
    pub(crate) distance_km: f64,
    pub(crate) distance: String,
    pub(crate) estimated_travel_time_min: i64,
}

impl From<AnnotatedPoint> for RankedSpot {
    fn from(entry: AnnotatedPoint) -> Self {
        Self {
            id: entry.poi.id,
            name: entry.poi.name,
            address: entry.poi.address,
            is_legal: entry.poi.is_legal,
            distance: format_distance(entry.distance_km),
            distance_km: entry.distance_km,
            estimated_travel_time_min: entry.estimated_travel_time_min,
        }
    }
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<Vec<RankedSpot>, CliError> {
    let catalogue = load_catalogue(&config.catalogue)?;
    let spots: Vec<_> = search_spots(&catalogue, &config.search, config.filter)
        .into_iter()
        .cloned()
        .collect();
    log::debug!(
        "{} of {} spots pass filter {} and search {:?}",
        spots.len(),
        catalogue.len(),
        config.filter,
        config.search
    );
    if config.origin.is_none() {
        log::info!("no location supplied; distances are unknown");
    }
    let ranked = rank_by_proximity_for_mode(&spots, config.origin, config.mode);
    Ok(ranked.into_iter().map(RankedSpot::from).collect())
}

pub(crate) fn execute_nearby(config: &NearbyConfig) -> Result<Vec<RankedSpot>, CliError> {
    let spots = load_catalogue(&config.catalogue)?;
    let nearby = spots_within_radius(&spots, Some(config.origin), config.radius_km);
    log::debug!(
        "{} of {} spots lie within {} km",
        nearby.len(),
        spots.len(),
        config.radius_km
    );
    Ok(nearby.into_iter().map(RankedSpot::from).collect())
}

pub(crate) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let ranked = execute_rank(&config)?;
    write_json(writer, &ranked)
}

pub(crate) fn run_nearby(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let nearby = execute_nearby(&config)?;
    write_json(writer, &nearby)
}

#[cfg(test)]
pub(crate) fn rank_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
