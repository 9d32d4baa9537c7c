//! Facade crate for the `ParkLah` parking engine.
//!
//! This crate re-exports the distance, ranking, filtering, success-rate and
//! heatmap operations of `parklah-core`, plus its deterministic test helpers behind
//! the `test-support` feature.
//!
//! # Examples
//!
//! ```
//! use parklah_engine::{TravelMode, distance_km, estimate_travel_time_min, lat_lng};
//!
//! let merdeka_square = lat_lng(3.1390, 101.6869);
//! let klcc = lat_lng(3.1573, 101.7123);
//! let km = distance_km(Some(merdeka_square), klcc);
//! assert_eq!(estimate_travel_time_min(km, TravelMode::Driving), 7);
//! ```

#![forbid(unsafe_code)]

pub use parklah_core::{
    AnnotatedPoint, ChanceBand, DEFAULT_NEARBY_RADIUS_KM, HeatmapSample, NO_FIX_DISTANCE_KM,
    PointOfInterest, RandomSource, SamplerConfig, SpotFilter, SpotFilterParseError,
    TrafficProfile, TrafficProfileError, TrafficWeightedSampler, TravelMode, TravelModeParseError,
    TravelSpeeds, TravelSpeedsError, available_spots, current_success_rate, distance_km,
    estimate_travel_time_min, format_distance, generate_heatmap_points, high_chance_spots,
    lat_lng, rank_by_proximity, rank_by_proximity_for_mode, search_spots, spots_within_radius,
};

#[cfg(feature = "test-support")]
pub use parklah_core::test_support;
