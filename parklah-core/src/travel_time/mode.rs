//! Closed set of travel modes with their urban-average speeds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::TravelModeParseError;

/// How the user intends to reach a spot.
///
/// # Examples
/// ```
/// use parklah_core::TravelMode;
///
/// assert_eq!(TravelMode::Walking.as_str(), "walking");
/// assert_eq!("Transit".parse::<TravelMode>().unwrap(), TravelMode::Transit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Urban driving with traffic.
    #[default]
    Driving,
    /// Walking at an average pace.
    Walking,
    /// Public transit including stops.
    Transit,
}

impl TravelMode {
    /// Every mode, in display order.
    pub const ALL: [Self; 3] = [Self::Driving, Self::Walking, Self::Transit];

    /// Default average speed in km/h.
    ///
    /// These are configuration constants for a dense city, not physics.
    #[must_use]
    pub const fn default_speed_kmh(self) -> f64 {
        match self {
            Self::Driving => 30.0,
            Self::Walking => 5.0,
            Self::Transit => 20.0,
        }
    }

    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = TravelModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "transit" => Ok(Self::Transit),
            _ => Err(TravelModeParseError {
                input: s.to_owned(),
            }),
        }
    }
}
