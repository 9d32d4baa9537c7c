//! Great-circle distance between the user and a parking spot.
//!
//! Distances are computed with the haversine formula on a spherical Earth.
//! A missing origin (no location fix yet, or permission denied) maps to the
//! [`NO_FIX_DISTANCE_KM`] sentinel so unranked spots sort last without any
//! special casing downstream.

use geo::Coord;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance reported when the origin is unknown.
///
/// Callers should render this as "unknown" rather than a literal distance.
pub const NO_FIX_DISTANCE_KM: f64 = 99_999.0;

/// Distance in kilometres from `origin` to `destination`.
///
/// Returns [`NO_FIX_DISTANCE_KM`] when `origin` is `None` or when either
/// coordinate is not finite.
///
/// # Examples
/// ```
/// use parklah_core::{NO_FIX_DISTANCE_KM, distance_km, lat_lng};
///
/// let klcc = lat_lng(3.1573, 101.7123);
/// assert_eq!(distance_km(None, klcc), NO_FIX_DISTANCE_KM);
/// assert_eq!(distance_km(Some(klcc), klcc), 0.0);
/// ```
#[must_use]
pub fn distance_km(origin: Option<Coord<f64>>, destination: Coord<f64>) -> f64 {
    let Some(start) = origin else {
        return NO_FIX_DISTANCE_KM;
    };
    let distance = haversine_km(start, destination);
    if distance.is_finite() {
        distance
    } else {
        NO_FIX_DISTANCE_KM
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "haversine is floating-point trigonometry"
)]
fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lng = (to.x - from.x).to_radians();
    let raw_half_chord = (d_lat / 2.0).sin().powi(2)
        + from.y.to_radians().cos() * to.y.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push the chord a hair past 1 for antipodal points.
    let half_chord = raw_half_chord.clamp(0.0, 1.0);
    let central_angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Render a distance for display.
///
/// Distances under one kilometre are shown in whole metres, longer ones in
/// kilometres with one decimal place.
///
/// # Examples
/// ```
/// use parklah_core::format_distance;
///
/// assert_eq!(format_distance(0.45), "450m");
/// assert_eq!(format_distance(3.04), "3.0km");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion from kilometres to metres"
)]
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{:.0}m", (distance_km * 1000.0).round())
    } else {
        format!("{distance_km:.1}km")
    }
}
