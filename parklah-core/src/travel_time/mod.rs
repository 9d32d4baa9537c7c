//! Estimate how long it takes to reach a parking spot.
//!
//! Estimates are straight-line distance divided by an average speed for the
//! chosen [`TravelMode`]. No routing service is consulted.

mod error;
mod mode;
mod speeds;

pub use error::{TravelModeParseError, TravelSpeedsError};
pub use mode::TravelMode;
pub use speeds::TravelSpeeds;

/// Whole minutes needed to cover `distance_km` using the default speeds.
///
/// Driving averages 30 km/h, walking 5 km/h and transit 20 km/h. A zero
/// distance always takes zero minutes. The [`NO_FIX_DISTANCE_KM`] sentinel
/// is not special-cased, so callers must treat its estimate as unknown too.
///
/// [`NO_FIX_DISTANCE_KM`]: crate::NO_FIX_DISTANCE_KM
///
/// # Examples
/// ```
/// use parklah_core::{TravelMode, estimate_travel_time_min};
///
/// assert_eq!(estimate_travel_time_min(3.02, TravelMode::Driving), 6);
/// assert_eq!(estimate_travel_time_min(1.0, TravelMode::Walking), 12);
/// ```
#[must_use]
pub fn estimate_travel_time_min(distance_km: f64, mode: TravelMode) -> i64 {
    TravelSpeeds::default().estimate_minutes(distance_km, mode)
}
