//! Turning `--lat`/`--lng` pairs into a user location.

use geo::Coord;
use parklah_core::lat_lng;

use crate::{ARG_LAT, ARG_LNG, CliError};

/// Resolve an optional user location.
///
/// Both halves absent means "no GPS fix"; exactly one half is an error.
pub(crate) fn optional_origin(
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Option<Coord<f64>>, CliError> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::IncompleteLocation {
            provided: ARG_LAT,
            missing: ARG_LNG,
        }),
        (None, Some(_)) => Err(CliError::IncompleteLocation {
            provided: ARG_LNG,
            missing: ARG_LAT,
        }),
        (Some(lat), Some(lng)) => origin(lat, lng).map(Some),
    }
}

/// Validate a WGS84 coordinate pair.
pub(crate) fn origin(lat: f64, lng: f64) -> Result<Coord<f64>, CliError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CliError::InvalidCoordinate {
            field: ARG_LAT,
            value: lat,
        });
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(CliError::InvalidCoordinate {
            field: ARG_LNG,
            value: lng,
        });
    }
    Ok(lat_lng(lat, lng))
}
