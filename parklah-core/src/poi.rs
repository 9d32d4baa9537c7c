//! Parking spots and their hourly traffic profiles.
//!
//! Coordinates follow the WGS84 convention used across the engine:
//! `x = longitude`, `y = latitude`, both in decimal degrees.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hourly slots in a [`TrafficProfile`].
pub const HOURS_PER_DAY: usize = 24;

const HOURS_PER_DAY_U32: u32 = 24;

/// Build a coordinate from latitude and longitude in that order.
///
/// # Examples
/// ```
/// use parklah_core::lat_lng;
///
/// let klcc = lat_lng(3.1573, 101.7123);
/// assert_eq!(klcc.x, 101.7123);
/// assert_eq!(klcc.y, 3.1573);
/// ```
#[must_use]
pub const fn lat_lng(latitude: f64, longitude: f64) -> Coord<f64> {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Map any hour onto a slot in `0..24`.
///
/// Hours past 23 wrap around midnight, so `24` is slot `0` and `38` is slot
/// `14`.
#[must_use]
pub fn hour_slot(hour: u32) -> usize {
    let wrapped = hour.checked_rem(HOURS_PER_DAY_U32).unwrap_or(0);
    usize::try_from(wrapped).unwrap_or(0)
}

/// Errors returned when building a [`TrafficProfile`] from a slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrafficProfileError {
    /// The supplied levels did not cover exactly one day.
    #[error("traffic profile must contain {expected} hourly levels, found {found}")]
    WrongLength {
        /// Required number of levels.
        expected: usize,
        /// Number of levels supplied.
        found: usize,
    },
}

/// "Percentage busy" for each hour of the day, midnight first.
///
/// Levels are expected to lie in `0..=100`. Consumers clamp on read, so
/// out-of-range values degrade gracefully instead of failing.
///
/// # Examples
/// ```
/// use parklah_core::TrafficProfile;
///
/// let profile = TrafficProfile::flat(40);
/// assert_eq!(profile.level_at(9), 40);
/// assert_eq!(profile.level_at(33), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<i32>", into = "Vec<i32>"))]
pub struct TrafficProfile([i32; HOURS_PER_DAY]);

impl TrafficProfile {
    /// Wrap a full day of hourly levels.
    #[must_use]
    pub const fn new(levels: [i32; HOURS_PER_DAY]) -> Self {
        Self(levels)
    }

    /// A profile with the same level at every hour.
    #[must_use]
    pub const fn flat(level: i32) -> Self {
        Self([level; HOURS_PER_DAY])
    }

    /// Level recorded for `hour`, wrapping hours past 23.
    #[must_use]
    pub fn level_at(&self, hour: u32) -> i32 {
        self.0.get(hour_slot(hour)).copied().unwrap_or_default()
    }

    /// Replace the level for `hour`, wrapping hours past 23.
    pub fn set_level(&mut self, hour: u32, level: i32) {
        if let Some(slot) = self.0.get_mut(hour_slot(hour)) {
            *slot = level;
        }
    }

    /// All hourly levels, midnight first.
    #[must_use]
    pub const fn levels(&self) -> &[i32; HOURS_PER_DAY] {
        &self.0
    }
}

impl Default for TrafficProfile {
    fn default() -> Self {
        Self::flat(0)
    }
}

impl TryFrom<&[i32]> for TrafficProfile {
    type Error = TrafficProfileError;

    fn try_from(levels: &[i32]) -> Result<Self, Self::Error> {
        <[i32; HOURS_PER_DAY]>::try_from(levels)
            .map(Self)
            .map_err(|_| TrafficProfileError::WrongLength {
                expected: HOURS_PER_DAY,
                found: levels.len(),
            })
    }
}

impl TryFrom<Vec<i32>> for TrafficProfile {
    type Error = TrafficProfileError;

    fn try_from(levels: Vec<i32>) -> Result<Self, Self::Error> {
        Self::try_from(levels.as_slice())
    }
}

impl From<TrafficProfile> for Vec<i32> {
    fn from(profile: TrafficProfile) -> Self {
        profile.0.to_vec()
    }
}

/// A parking location offered to the user.
///
/// The record is owned by the caller's catalogue; the engine only reads it.
/// Spots are legal car parks unless marked otherwise; illegal roadside
/// spots risk a summons.
///
/// # Examples
/// ```
/// use parklah_core::{PointOfInterest, TrafficProfile, lat_lng};
///
/// let pavilion = PointOfInterest::new(
///     1,
///     lat_lng(3.1492, 101.7135),
///     1800,
///     75,
///     TrafficProfile::flat(50),
/// )
/// .with_name("Pavilion KL Parking");
///
/// assert_eq!(pavilion.id, 1);
/// assert_eq!(pavilion.latitude(), 3.1492);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointOfInterest {
    /// Unique identifier.
    pub id: u64,
    /// Display name; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Street address; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Whether parking here is permitted.
    #[cfg_attr(feature = "serde", serde(default = "legal_by_default"))]
    pub is_legal: bool,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Number of bays. Only used as a density multiplier and for the
    /// available-spot estimate.
    pub capacity: i32,
    /// Static chance of finding a bay, in percent.
    pub finding_probability: i32,
    /// Hourly traffic levels.
    pub traffic: TrafficProfile,
}

#[cfg(feature = "serde")]
const fn legal_by_default() -> bool {
    true
}

impl PointOfInterest {
    /// Construct an unnamed, legal spot with no address.
    #[must_use]
    pub const fn new(
        id: u64,
        location: Coord<f64>,
        capacity: i32,
        finding_probability: i32,
        traffic: TrafficProfile,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            address: String::new(),
            is_legal: true,
            location,
            capacity,
            finding_probability,
            traffic,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Mark the spot as a legal car park or an illegal roadside spot.
    #[must_use]
    pub const fn with_legality(mut self, is_legal: bool) -> Self {
        self.is_legal = is_legal;
        self
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Traffic level at `hour`, wrapping hours past 23.
    #[must_use]
    pub fn traffic_at(&self, hour: u32) -> i32 {
        self.traffic.level_at(hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(23, 23)]
    #[case(24, 0)]
    #[case(38, 14)]
    #[case(u32::MAX, 15)]
    fn hour_slot_wraps_past_midnight(#[case] hour: u32, #[case] expected: usize) {
        assert_eq!(hour_slot(hour), expected);
    }

    #[rstest]
    fn profile_rejects_short_input() {
        let err = TrafficProfile::try_from(vec![10; 23]).unwrap_err();
        assert_eq!(
            err,
            TrafficProfileError::WrongLength {
                expected: 24,
                found: 23
            }
        );
    }

    #[rstest]
    fn profile_accepts_full_day() {
        let levels: Vec<i32> = (0..24).collect();
        let profile = TrafficProfile::try_from(levels).unwrap();
        assert_eq!(profile.level_at(0), 0);
        assert_eq!(profile.level_at(23), 23);
    }

    #[rstest]
    fn set_level_wraps_hour() {
        let mut profile = TrafficProfile::default();
        profile.set_level(26, 80);
        assert_eq!(profile.level_at(2), 80);
    }

    #[rstest]
    fn poi_accessors_follow_lat_lng_convention() {
        let poi = PointOfInterest::new(7, lat_lng(3.1, 101.6), 10, 50, TrafficProfile::flat(0));
        assert_eq!(poi.latitude(), 3.1);
        assert_eq!(poi.longitude(), 101.6);
        assert!(poi.name.is_empty());
        assert!(poi.address.is_empty());
        assert!(poi.is_legal);
    }

    #[rstest]
    fn builders_attach_address_and_legality() {
        let poi = PointOfInterest::new(4, lat_lng(3.155, 101.708), 15, 80, TrafficProfile::flat(0))
            .with_address("Jalan P. Ramlee, Golden Triangle, 50250")
            .with_legality(false);
        assert_eq!(poi.address, "Jalan P. Ramlee, Golden Triangle, 50250");
        assert!(!poi.is_legal);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serde_defaults_to_a_legal_spot_without_address() {
        let levels = vec!["0"; 24].join(",");
        let json = format!(
            r#"{{"id":9,"location":{{"x":101.7,"y":3.1}},"capacity":10,
                "finding_probability":50,"traffic":[{levels}]}}"#
        );
        let poi: PointOfInterest = serde_json::from_str(&json).expect("valid spot");
        assert!(poi.is_legal);
        assert!(poi.address.is_empty());
        assert!(poi.name.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serde_rejects_partial_profile() {
        let result: Result<TrafficProfile, _> = serde_json::from_str("[1, 2, 3]");
        assert!(result.is_err());
    }
}
