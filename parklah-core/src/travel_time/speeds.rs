//! Configurable average-speed table.

use super::{TravelMode, error::TravelSpeedsError};

/// Average speed per [`TravelMode`], in km/h.
///
/// The constructor rejects non-positive speeds, so estimates never divide by
/// zero even when the table comes from configuration.
///
/// # Examples
/// ```
/// use parklah_core::{TravelMode, TravelSpeeds};
///
/// # fn main() -> Result<(), parklah_core::TravelSpeedsError> {
/// let rush_hour = TravelSpeeds::new(15.0, 5.0, 12.0)?;
/// assert_eq!(rush_hour.estimate_minutes(3.0, TravelMode::Driving), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelSpeeds {
    driving_kmh: f64,
    walking_kmh: f64,
    transit_kmh: f64,
}

impl Default for TravelSpeeds {
    fn default() -> Self {
        Self {
            driving_kmh: TravelMode::Driving.default_speed_kmh(),
            walking_kmh: TravelMode::Walking.default_speed_kmh(),
            transit_kmh: TravelMode::Transit.default_speed_kmh(),
        }
    }
}

impl TravelSpeeds {
    /// Validates and constructs a speed table.
    ///
    /// # Errors
    /// Returns [`TravelSpeedsError::InvalidSpeed`] for the first speed that is
    /// not a finite, strictly positive number.
    pub fn new(
        driving_kmh: f64,
        walking_kmh: f64,
        transit_kmh: f64,
    ) -> Result<Self, TravelSpeedsError> {
        let speeds = Self {
            driving_kmh,
            walking_kmh,
            transit_kmh,
        };
        for mode in TravelMode::ALL {
            let speed = speeds.speed_kmh(mode);
            if !(speed.is_finite() && speed > 0.0) {
                return Err(TravelSpeedsError::InvalidSpeed { mode, speed });
            }
        }
        Ok(speeds)
    }

    /// Average speed for `mode`.
    #[must_use]
    pub const fn speed_kmh(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Driving => self.driving_kmh,
            TravelMode::Walking => self.walking_kmh,
            TravelMode::Transit => self.transit_kmh,
        }
    }

    /// Whole minutes needed to cover `distance_km` in `mode`.
    ///
    /// The result is `round(distance / speed * 60)`. Negative and sentinel
    /// distances pass through arithmetically; non-finite results collapse to
    /// zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "travel time is distance over speed"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "rounded minutes for any finite distance fit in i64; `as` saturates"
    )]
    pub fn estimate_minutes(&self, distance_km: f64, mode: TravelMode) -> i64 {
        let hours = distance_km / self.speed_kmh(mode);
        let minutes = (hours * 60.0).round();
        if minutes.is_finite() {
            minutes as i64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, f64::NAN)]
    #[case(-5.0, 5.0)]
    #[case(f64::INFINITY, 5.0)]
    fn rejects_unusable_speeds(#[case] driving: f64, #[case] walking: f64) {
        let result = TravelSpeeds::new(driving, walking, 20.0);
        assert!(matches!(
            result,
            Err(TravelSpeedsError::InvalidSpeed {
                mode: TravelMode::Driving,
                ..
            })
        ));
    }

    #[rstest]
    fn reports_the_offending_mode() {
        let err = TravelSpeeds::new(30.0, 5.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            TravelSpeedsError::InvalidSpeed {
                mode: TravelMode::Transit,
                ..
            }
        ));
        assert!(err.to_string().contains("transit"));
    }

    #[rstest]
    fn default_table_matches_mode_constants() {
        let speeds = TravelSpeeds::default();
        for mode in TravelMode::ALL {
            assert_eq!(speeds.speed_kmh(mode), mode.default_speed_kmh());
        }
    }

    #[rstest]
    fn non_finite_distance_collapses_to_zero() {
        let speeds = TravelSpeeds::default();
        assert_eq!(speeds.estimate_minutes(f64::NAN, TravelMode::Walking), 0);
        assert_eq!(speeds.estimate_minutes(f64::INFINITY, TravelMode::Walking), 0);
    }
}
