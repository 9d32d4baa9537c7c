//! Synthetic traffic-density clouds for heatmap overlays.
//!
//! Each parking spot becomes a dense anchor sample plus branches radiating
//! along the eight compass bearings, imitating the road network feeding the
//! car park. Branch length is fixed; branch density follows capacity and
//! every weight follows the spot's traffic level for the requested hour.
//! Samples are a rendering aid, not measurements.
//!
//! Per spot:
//! - one anchor at the spot itself, weighted `traffic * 2`;
//! - `min(ceil(capacity / 20), 20)` steps along each cardinal bearing and
//!   half that (rounded up) along each diagonal, each step further out and
//!   lighter than the last, with a small random sideways jitter;
//! - a side-street sample beside every second step at half the step weight.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PointOfInterest, RandomSource};

/// Anchor weight relative to the spot's traffic weight.
pub const ANCHOR_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Weight of the first branch step relative to the spot's traffic weight.
pub const BRANCH_WEIGHT_FACTOR: f64 = 0.8;

/// Side-street weight relative to the branch step it hangs off.
pub const SIDE_STREET_WEIGHT_FACTOR: f64 = 0.5;

/// Bays represented by one branch step.
pub const CAPACITY_PER_STEP: u32 = 20;

/// Upper bound on steps along one bearing, whatever the capacity.
pub const MAX_STEPS_PER_BEARING: u32 = 20;

/// Length of one degree of latitude.
pub const METRES_PER_DEGREE_LATITUDE: f64 = 111_320.0;

/// Compass bearings in degrees clockwise from north; even indices are
/// cardinal.
const BEARINGS_DEG: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Floor for `cos(latitude)` so longitude offsets stay finite at the poles.
const MIN_LONGITUDE_SCALE: f64 = 1e-6;

/// One weighted point of a heatmap overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatmapSample {
    /// Sample position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Rendering weight in `0.0..=2.0`.
    pub weight: f64,
}

/// Geometry of the generated branches.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Distance of the outermost branch step from the spot.
    pub max_reach_m: f64,
    /// Largest sideways jitter applied to a branch step.
    pub jitter_m: f64,
    /// Sideways distance of side-street samples from their branch.
    pub side_street_offset_m: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_reach_m: 300.0,
            jitter_m: 15.0,
            side_street_offset_m: 40.0,
        }
    }
}

impl SamplerConfig {
    /// Replace negative or non-finite distances with zero.
    #[must_use]
    pub const fn sanitised(self) -> Self {
        Self {
            max_reach_m: sanitise_metres(self.max_reach_m),
            jitter_m: sanitise_metres(self.jitter_m),
            side_street_offset_m: sanitise_metres(self.side_street_offset_m),
        }
    }
}

const fn sanitise_metres(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Generates heatmap samples around parking spots.
///
/// The sampler holds only geometry; randomness is passed per call.
///
/// # Examples
/// ```
/// use parklah_core::{PointOfInterest, TrafficProfile, TrafficWeightedSampler, lat_lng};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let spot = PointOfInterest::new(1, lat_lng(3.1492, 101.7135), 40, 75, TrafficProfile::flat(50));
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let samples = TrafficWeightedSampler::default().sample(&[spot], 9, &mut rng);
/// // Anchor, 4 cardinal branches of 2 steps, 4 diagonal branches of 1 step,
/// // and one side street per cardinal branch.
/// assert_eq!(samples.len(), 1 + 8 + 4 + 4);
/// assert_eq!(samples[0].weight, 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficWeightedSampler {
    config: SamplerConfig,
}

impl TrafficWeightedSampler {
    /// Construct a sampler, sanitising the supplied geometry.
    #[must_use]
    pub const fn new(config: SamplerConfig) -> Self {
        Self {
            config: config.sanitised(),
        }
    }

    /// Geometry in use.
    #[must_use]
    pub const fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Samples for every spot in `points` during `now_hour`.
    ///
    /// Hours past 23 wrap around midnight. An empty slice yields no samples.
    pub fn sample<R>(
        &self,
        points: &[PointOfInterest],
        now_hour: u32,
        rng: &mut R,
    ) -> Vec<HeatmapSample>
    where
        R: RandomSource + ?Sized,
    {
        let capacity = points.iter().map(expected_sample_count).sum();
        let mut samples = Vec::with_capacity(capacity);
        for point in points {
            self.sample_point(point, now_hour, rng, &mut samples);
        }
        log::debug!(
            "generated {} heatmap samples for {} spots at hour {now_hour}",
            samples.len(),
            points.len()
        );
        samples
    }

    #[expect(clippy::float_arithmetic, reason = "anchor weight scaling")]
    fn sample_point<R>(
        &self,
        point: &PointOfInterest,
        now_hour: u32,
        rng: &mut R,
        samples: &mut Vec<HeatmapSample>,
    ) where
        R: RandomSource + ?Sized,
    {
        let weight = traffic_weight(point, now_hour);
        samples.push(HeatmapSample {
            location: point.location,
            weight: weight * ANCHOR_WEIGHT_MULTIPLIER,
        });

        let density = steps_per_bearing(point.capacity);
        for (index, bearing) in BEARINGS_DEG.iter().enumerate() {
            let branch = Branch::new(point.location, *bearing, steps_for_bearing(density, index));
            self.walk_branch(&branch, weight, rng, samples);
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "branch geometry interpolates distances and weights"
    )]
    fn walk_branch<R>(
        &self,
        branch: &Branch,
        weight: f64,
        rng: &mut R,
        samples: &mut Vec<HeatmapSample>,
    ) where
        R: RandomSource + ?Sized,
    {
        let total = f64::from(branch.steps);
        for step in 0..branch.steps {
            let reach = self.config.max_reach_m * f64::from(step + 1) / total;
            let falloff = 1.0 - f64::from(step) / total;
            let step_weight = weight * falloff * BRANCH_WEIGHT_FACTOR;

            let jitter = (rng.next_unit() - 0.5) * 2.0 * self.config.jitter_m;
            samples.push(HeatmapSample {
                location: branch.offset(reach, jitter),
                weight: step_weight,
            });

            if is_side_street_step(step) {
                let side = if rng.next_unit() < 0.5 { -1.0 } else { 1.0 };
                samples.push(HeatmapSample {
                    location: branch.offset(reach, side * self.config.side_street_offset_m),
                    weight: step_weight * SIDE_STREET_WEIGHT_FACTOR,
                });
            }
        }
    }
}

/// A straight run of samples leaving a spot along one bearing.
struct Branch {
    origin: Coord<f64>,
    sin_bearing: f64,
    cos_bearing: f64,
    steps: u32,
}

impl Branch {
    fn new(origin: Coord<f64>, bearing_deg: f64, steps: u32) -> Self {
        let (sin_bearing, cos_bearing) = bearing_deg.to_radians().sin_cos();
        Self {
            origin,
            sin_bearing,
            cos_bearing,
            steps,
        }
    }

    /// Point `along_m` down the branch and `across_m` to its right.
    #[expect(clippy::float_arithmetic, reason = "rotating a local offset")]
    fn offset(&self, along_m: f64, across_m: f64) -> Coord<f64> {
        let north_m = along_m * self.cos_bearing - across_m * self.sin_bearing;
        let east_m = along_m * self.sin_bearing + across_m * self.cos_bearing;
        offset_by_metres(self.origin, north_m, east_m)
    }
}

/// Shift `origin` by local north/east distances.
#[expect(
    clippy::float_arithmetic,
    reason = "equirectangular metre-to-degree conversion"
)]
fn offset_by_metres(origin: Coord<f64>, north_m: f64, east_m: f64) -> Coord<f64> {
    let longitude_scale = origin.y.to_radians().cos().abs().max(MIN_LONGITUDE_SCALE);
    Coord {
        x: origin.x + east_m / (METRES_PER_DEGREE_LATITUDE * longitude_scale),
        y: origin.y + north_m / METRES_PER_DEGREE_LATITUDE,
    }
}

/// Traffic level at `now_hour` as a fraction in `0.0..=1.0`.
#[expect(clippy::float_arithmetic, reason = "percentage to fraction")]
fn traffic_weight(point: &PointOfInterest, now_hour: u32) -> f64 {
    let level = point.traffic_at(now_hour);
    let clamped = level.clamp(0, 100);
    if clamped != level {
        log::warn!(
            "traffic level {level} for spot {} at hour {now_hour} is outside 0..=100; using {clamped}",
            point.id
        );
    }
    f64::from(clamped) / 100.0
}

/// Branch density for a spot: `min(ceil(capacity / 20), 20)`, or zero when
/// the capacity is not positive.
///
/// # Examples
/// ```
/// use parklah_core::steps_per_bearing;
///
/// assert_eq!(steps_per_bearing(0), 0);
/// assert_eq!(steps_per_bearing(21), 2);
/// assert_eq!(steps_per_bearing(5400), 20);
/// ```
#[must_use]
pub fn steps_per_bearing(capacity: i32) -> u32 {
    u32::try_from(capacity).map_or(0, |bays| {
        bays.div_ceil(CAPACITY_PER_STEP).min(MAX_STEPS_PER_BEARING)
    })
}

/// Cardinal bearings carry the full density, diagonals half of it.
const fn steps_for_bearing(density: u32, bearing_index: usize) -> u32 {
    if bearing_index.is_multiple_of(2) {
        density
    } else {
        density.div_ceil(2)
    }
}

/// Side streets branch off the second, fourth, sixth... step.
const fn is_side_street_step(step: u32) -> bool {
    !step.is_multiple_of(2)
}

/// Number of samples [`TrafficWeightedSampler::sample`] emits for `point`.
///
/// The count is independent of the random source.
#[must_use]
pub fn expected_sample_count(point: &PointOfInterest) -> usize {
    let density = steps_per_bearing(point.capacity);
    let branch_samples: u32 = (0..BEARINGS_DEG.len())
        .map(|index| {
            let steps = steps_for_bearing(density, index);
            let side_streets = (0..steps).filter(|step| is_side_street_step(*step)).count();
            steps + u32::try_from(side_streets).unwrap_or(0)
        })
        .sum();
    1 + usize::try_from(branch_samples).unwrap_or(0)
}

/// Samples for every spot in `points` using the default geometry.
///
/// # Examples
/// ```
/// use parklah_core::generate_heatmap_points;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert!(generate_heatmap_points(&[], 12, &mut rng).is_empty());
/// ```
pub fn generate_heatmap_points<R>(
    points: &[PointOfInterest],
    now_hour: u32,
    rng: &mut R,
) -> Vec<HeatmapSample>
where
    R: RandomSource + ?Sized,
{
    TrafficWeightedSampler::default().sample(points, now_hour, rng)
}
