//! Error types emitted by the `ParkLah` CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use parklah_core::{SpotFilterParseError, TrafficProfileError, TravelModeParseError};
use thiserror::Error;

/// Errors emitted by the `ParkLah` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Only one half of the user's coordinate was supplied.
    #[error("--{provided} was given without --{missing}")]
    IncompleteLocation {
        provided: &'static str,
        missing: &'static str,
    },
    /// A coordinate was outside the WGS84 range or not a number.
    #[error("{field} {value} is not a valid coordinate")]
    InvalidCoordinate { field: &'static str, value: f64 },
    /// The search radius was negative or not a number.
    #[error("radius {radius} km must be a non-negative number")]
    InvalidRadius { radius: f64 },
    /// The travel mode could not be parsed.
    #[error(transparent)]
    InvalidTravelMode(#[from] TravelModeParseError),
    /// The spot filter could not be parsed.
    #[error(transparent)]
    InvalidSpotFilter(#[from] SpotFilterParseError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalogue failed.
    #[error("failed to open catalogue at {path:?}: {source}")]
    OpenCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalogue JSON could not be decoded.
    #[error("failed to parse catalogue JSON at {path:?}: {source}")]
    ParseCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A catalogue entry was structurally valid JSON but not a usable spot.
    #[error("catalogue entry {id} in {path:?} is invalid: {source}")]
    InvalidCatalogueEntry {
        path: Utf8PathBuf,
        id: u64,
        #[source]
        source: TrafficProfileError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
