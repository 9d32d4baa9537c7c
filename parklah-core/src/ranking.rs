//! Order parking spots by proximity to the user.
//!
//! Ranking is recomputed from scratch on every location update. Each call
//! clones the spots into fresh [`AnnotatedPoint`] values and never touches
//! the caller's slice.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{PointOfInterest, TravelMode, distance_km, estimate_travel_time_min};

/// Radius used for the "nearby spots" list.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 2.0;

/// A spot together with its distance and travel time from the user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnnotatedPoint {
    /// The ranked spot.
    pub poi: PointOfInterest,
    /// Great-circle distance from the origin, or the no-fix sentinel.
    pub distance_km: f64,
    /// Travel time estimate for the ranking mode.
    pub estimated_travel_time_min: i64,
}

impl AnnotatedPoint {
    /// Annotate `poi` relative to `origin`.
    #[must_use]
    pub fn new(poi: &PointOfInterest, origin: Option<Coord<f64>>, mode: TravelMode) -> Self {
        let distance = distance_km(origin, poi.location);
        Self {
            poi: poi.clone(),
            distance_km: distance,
            estimated_travel_time_min: estimate_travel_time_min(distance, mode),
        }
    }
}

/// Rank spots nearest first, with driving estimates.
///
/// Spots at equal distance keep their input order. Without an origin every
/// spot carries the sentinel distance, so the input order is returned.
///
/// # Examples
/// ```
/// use parklah_core::{PointOfInterest, TrafficProfile, lat_lng, rank_by_proximity};
///
/// let far = PointOfInterest::new(1, lat_lng(3.20, 101.70), 10, 50, TrafficProfile::flat(0));
/// let near = PointOfInterest::new(2, lat_lng(3.14, 101.69), 10, 50, TrafficProfile::flat(0));
///
/// let ranked = rank_by_proximity(&[far, near], Some(lat_lng(3.139, 101.6869)));
/// let ids: Vec<u64> = ranked.iter().map(|entry| entry.poi.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
#[must_use]
pub fn rank_by_proximity(
    points: &[PointOfInterest],
    origin: Option<Coord<f64>>,
) -> Vec<AnnotatedPoint> {
    rank_by_proximity_for_mode(points, origin, TravelMode::Driving)
}

/// Rank spots nearest first, estimating travel time for `mode`.
#[must_use]
pub fn rank_by_proximity_for_mode(
    points: &[PointOfInterest],
    origin: Option<Coord<f64>>,
    mode: TravelMode,
) -> Vec<AnnotatedPoint> {
    let mut ranked: Vec<AnnotatedPoint> = points
        .iter()
        .map(|poi| AnnotatedPoint::new(poi, origin, mode))
        .collect();
    // `sort_by` is stable; ties keep catalogue order.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Ranked spots no further than `radius_km` from `origin`.
///
/// Returns an empty list when the user's location is unknown.
#[must_use]
pub fn spots_within_radius(
    points: &[PointOfInterest],
    origin: Option<Coord<f64>>,
    radius_km: f64,
) -> Vec<AnnotatedPoint> {
    if origin.is_none() {
        return Vec::new();
    }
    rank_by_proximity(points, origin)
        .into_iter()
        .filter(|entry| entry.distance_km <= radius_km)
        .collect()
}
