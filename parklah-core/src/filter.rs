//! Narrow the spot list by legality, finding chance and a free-text query.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PointOfInterest;

/// Minimum static finding probability for the "high chance" list.
pub const HIGH_CHANCE_THRESHOLD: i32 = 70;

/// Which spots a list should show.
///
/// # Examples
/// ```
/// use parklah_core::SpotFilter;
///
/// assert_eq!("High-Chance".parse::<SpotFilter>().unwrap(), SpotFilter::HighChance);
/// assert_eq!(SpotFilter::Illegal.to_string(), "illegal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SpotFilter {
    /// Every spot.
    #[default]
    All,
    /// Legal car parks only.
    Legal,
    /// Roadside spots that risk a summons.
    Illegal,
    /// Spots whose finding probability reaches [`HIGH_CHANCE_THRESHOLD`].
    HighChance,
}

impl SpotFilter {
    /// Every filter, in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Legal, Self::Illegal, Self::HighChance];

    /// Return the filter as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Legal => "legal",
            Self::Illegal => "illegal",
            Self::HighChance => "high-chance",
        }
    }

    /// Whether `poi` passes this filter.
    #[must_use]
    pub const fn matches(self, poi: &PointOfInterest) -> bool {
        match self {
            Self::All => true,
            Self::Legal => poi.is_legal,
            Self::Illegal => !poi.is_legal,
            Self::HighChance => poi.finding_probability >= HIGH_CHANCE_THRESHOLD,
        }
    }
}

impl std::fmt::Display for SpotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpotFilter {
    type Err = SpotFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "legal" => Ok(Self::Legal),
            "illegal" => Ok(Self::Illegal),
            "high-chance" => Ok(Self::HighChance),
            _ => Err(SpotFilterParseError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Error returned when a string does not name a [`SpotFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spot filter '{input}' (expected all, legal, illegal or high-chance)")]
pub struct SpotFilterParseError {
    /// The rejected input.
    pub input: String,
}

/// Spots passing `filter` whose name or address contains `query`, in input
/// order.
///
/// Matching ignores case. An empty query matches every spot.
///
/// # Examples
/// ```
/// use parklah_core::{PointOfInterest, SpotFilter, TrafficProfile, lat_lng, search_spots};
///
/// let spot = |id, address: &str, legal| {
///     PointOfInterest::new(id, lat_lng(3.15, 101.71), 10, 50, TrafficProfile::flat(0))
///         .with_address(address)
///         .with_legality(legal)
/// };
/// let spots = [
///     spot(1, "Jalan Bukit Bintang", true),
///     spot(4, "Jalan P. Ramlee", false),
/// ];
///
/// let hits = search_spots(&spots, "jalan", SpotFilter::Legal);
/// let ids: Vec<u64> = hits.iter().map(|poi| poi.id).collect();
/// assert_eq!(ids, vec![1]);
/// ```
#[must_use]
pub fn search_spots<'a>(
    points: &'a [PointOfInterest],
    query: &str,
    filter: SpotFilter,
) -> Vec<&'a PointOfInterest> {
    let needle = query.to_lowercase();
    points
        .iter()
        .filter(|poi| filter.matches(poi))
        .filter(|poi| {
            needle.is_empty()
                || poi.name.to_lowercase().contains(&needle)
                || poi.address.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Spots whose static finding probability reaches
/// [`HIGH_CHANCE_THRESHOLD`], in input order.
#[must_use]
pub fn high_chance_spots(points: &[PointOfInterest]) -> Vec<&PointOfInterest> {
    search_spots(points, "", SpotFilter::HighChance)
}
