use thiserror::Error;

use super::TravelMode;

/// Errors from [`TravelSpeeds::new`](super::TravelSpeeds::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TravelSpeedsError {
    /// A speed was zero, negative or not finite.
    ///
    /// Estimates divide by the speed, so every mode needs a positive value.
    #[error("average speed for {mode} must be a positive number of km/h, got {speed}")]
    InvalidSpeed {
        /// Mode whose speed was rejected.
        mode: TravelMode,
        /// Rejected speed in km/h.
        speed: f64,
    },
}

/// Error returned when a string does not name a [`TravelMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{input}' (expected driving, walking or transit)")]
pub struct TravelModeParseError {
    /// The rejected input.
    pub input: String,
}
