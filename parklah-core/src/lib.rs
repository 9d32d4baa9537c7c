//! Core geospatial logic for the `ParkLah` parking finder.
//!
//! The crate answers three questions about a catalogue of parking spots:
//! how far away each one is (and how long getting there takes), how likely
//! a free bay is right now, and where traffic concentrates around it for a
//! heatmap overlay. Spot lists can also be narrowed by legality, finding
//! chance and a free-text search. Every operation is a pure function of its arguments;
//! the caller supplies the user's location, the hour and any randomness.
//!
//! Coordinates use [`geo::Coord`] with `x = longitude` and `y = latitude`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod filter;
pub mod heatmap;
pub mod poi;
pub mod random;
pub mod ranking;
pub mod success_rate;
pub mod travel_time;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_KM, NO_FIX_DISTANCE_KM, distance_km, format_distance};
pub use filter::{
    HIGH_CHANCE_THRESHOLD, SpotFilter, SpotFilterParseError, high_chance_spots, search_spots,
};
pub use heatmap::{
    HeatmapSample, SamplerConfig, TrafficWeightedSampler, expected_sample_count,
    generate_heatmap_points, steps_per_bearing,
};
pub use poi::{
    HOURS_PER_DAY, PointOfInterest, TrafficProfile, TrafficProfileError, hour_slot, lat_lng,
};
pub use random::RandomSource;
pub use ranking::{
    AnnotatedPoint, DEFAULT_NEARBY_RADIUS_KM, rank_by_proximity, rank_by_proximity_for_mode,
    spots_within_radius,
};
pub use success_rate::{
    ChanceBand, MAX_SUCCESS_RATE, MIN_SUCCESS_RATE, available_spots, current_success_rate,
    day_progress_percent, success_rate,
};
pub use travel_time::{
    TravelMode, TravelModeParseError, TravelSpeeds, TravelSpeedsError, estimate_travel_time_min,
};
