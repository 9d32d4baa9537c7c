//! Loading the parking catalogue from JSON.
//!
//! The catalogue is a JSON array using the field names of the web client's
//! data tables. Fields the engine does not model (prices, entrances and
//! so on) are ignored.

use camino::{Utf8Path, Utf8PathBuf};
use parklah_core::{PointOfInterest, TrafficProfile, TrafficProfileError, lat_lng};
use serde::{Deserialize, Serialize};
use std::io::BufReader;

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_CATALOGUE, CliError};

/// One spot as stored in a catalogue file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogueEntry {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) address: String,
    #[serde(default = "legal_by_default")]
    pub(crate) is_legal: bool,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) capacity: i32,
    pub(crate) finding_probability: i32,
    pub(crate) traffic_frequency: Vec<i32>,
}

const fn legal_by_default() -> bool {
    true
}

impl TryFrom<CatalogueEntry> for PointOfInterest {
    type Error = TrafficProfileError;

    fn try_from(entry: CatalogueEntry) -> Result<Self, Self::Error> {
        let traffic = TrafficProfile::try_from(entry.traffic_frequency)?;
        Ok(Self::new(
            entry.id,
            lat_lng(entry.lat, entry.lng),
            entry.capacity,
            entry.finding_probability,
            traffic,
        )
        .with_name(entry.name)
        .with_address(entry.address)
        .with_legality(entry.is_legal))
    }
}

/// Fail early with a precise error when the catalogue path is unusable.
pub(crate) fn require_catalogue(path: &Utf8Path) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field: ARG_CATALOGUE,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field: ARG_CATALOGUE,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field: ARG_CATALOGUE,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read every spot from the catalogue at `path`, in file order.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<Vec<PointOfInterest>, CliError> {
    require_catalogue(path)?;
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalogue {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<CatalogueEntry> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| CliError::ParseCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
    let spots = entries
        .into_iter()
        .map(|entry| {
            let id = entry.id;
            PointOfInterest::try_from(entry).map_err(|source| CliError::InvalidCatalogueEntry {
                path: Utf8PathBuf::from(path),
                id,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded {} spots from {path}", spots.len());
    Ok(spots)
}
