//! Time-adjusted chance of finding a free bay.
//!
//! The estimate scales a spot's static finding probability by how quiet the
//! current hour is, then clamps the result into `5..=95` so the UI never
//! promises a certain outcome in either direction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PointOfInterest, hour_slot};

/// Lowest success rate ever reported, in percent.
pub const MIN_SUCCESS_RATE: i32 = 5;

/// Highest success rate ever reported, in percent.
pub const MAX_SUCCESS_RATE: i32 = 95;

/// Chance of finding a bay at `point` during `now_hour`, in percent.
///
/// Hours past 23 wrap around midnight. The result is
/// `clamp(round(probability * (100 - traffic) / 100), 5, 95)`; malformed
/// probabilities or traffic levels are absorbed by the final clamp.
///
/// # Examples
/// ```
/// use parklah_core::{PointOfInterest, TrafficProfile, current_success_rate, lat_lng};
///
/// let mut traffic = TrafficProfile::flat(20);
/// traffic.set_level(14, 70);
/// let pavilion = PointOfInterest::new(1, lat_lng(3.1492, 101.7135), 1800, 75, traffic);
///
/// assert_eq!(current_success_rate(&pavilion, 14), 23);
/// ```
#[must_use]
pub fn current_success_rate(point: &PointOfInterest, now_hour: u32) -> i32 {
    success_rate(point.finding_probability, point.traffic_at(now_hour))
}

/// Success rate for a raw probability and traffic level.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the traffic adjustment is a fractional scale factor"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the rate is clamped into 5..=95 before the cast"
)]
pub fn success_rate(finding_probability: i32, traffic_level: i32) -> i32 {
    let adjustment = (100.0 - f64::from(traffic_level)) / 100.0;
    let raw = (f64::from(finding_probability) * adjustment).round();
    raw.clamp(f64::from(MIN_SUCCESS_RATE), f64::from(MAX_SUCCESS_RATE)) as i32
}

/// Coarse label for a success rate, used for colour coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChanceBand {
    /// 70 percent or more.
    High,
    /// 50 to 69 percent.
    Moderate,
    /// 30 to 49 percent.
    Low,
    /// Under 30 percent.
    Poor,
}

impl ChanceBand {
    /// Band containing `rate`.
    ///
    /// # Examples
    /// ```
    /// use parklah_core::ChanceBand;
    ///
    /// assert_eq!(ChanceBand::from_rate(70), ChanceBand::High);
    /// assert_eq!(ChanceBand::from_rate(29), ChanceBand::Poor);
    /// ```
    #[must_use]
    pub const fn from_rate(rate: i32) -> Self {
        if rate >= 70 {
            Self::High
        } else if rate >= 50 {
            Self::Moderate
        } else if rate >= 30 {
            Self::Low
        } else {
            Self::Poor
        }
    }

    /// Return the band as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ChanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough count of free bays at `point` during `now_hour`.
///
/// Computed as `floor(capacity * (100 - traffic) / 100)` in integer
/// arithmetic, with the traffic level clamped into `0..=100`; never negative.
///
/// # Examples
/// ```
/// use parklah_core::{PointOfInterest, TrafficProfile, available_spots, lat_lng};
///
/// let klcc = PointOfInterest::new(2, lat_lng(3.1574, 101.7124), 5400, 85, TrafficProfile::flat(80));
/// assert_eq!(available_spots(&klcc, 14), 1080);
/// ```
#[must_use]
pub fn available_spots(point: &PointOfInterest, now_hour: u32) -> i32 {
    let idle_percent = 100 - point.traffic_at(now_hour).clamp(0, 100);
    let free = (i64::from(point.capacity) * i64::from(idle_percent)).div_euclid(100);
    i32::try_from(free.max(0)).unwrap_or(i32::MAX)
}

/// Position of a wall-clock time along the day, in percent.
///
/// Used to place the "now" marker on a 24-hour traffic chart. Hours wrap
/// around midnight and minutes are clamped to `0..=59`.
///
/// # Examples
/// ```
/// use parklah_core::day_progress_percent;
///
/// assert_eq!(day_progress_percent(12, 0), 50.0);
/// assert!((day_progress_percent(18, 30) - 77.083).abs() < 0.001);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "fractional hours")]
pub fn day_progress_percent(hour: u32, minute: u32) -> f64 {
    let slot = u32::try_from(hour_slot(hour)).unwrap_or(0);
    let fractional_hour = f64::from(slot) + f64::from(minute.min(59)) / 60.0;
    fractional_hour / 24.0 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TrafficProfile, lat_lng};
    use rstest::{fixture, rstest};

    #[fixture]
    fn pavilion() -> PointOfInterest {
        let traffic = TrafficProfile::new([
            20, 15, 10, 8, 12, 25, 45, 65, 80, 85, 90, 95, 85, 75, 70, 80, 85, 90, 85, 70, 55, 40,
            30, 25,
        ]);
        PointOfInterest::new(1, lat_lng(3.1492, 101.7135), 1800, 75, traffic)
    }

    #[rstest]
    fn afternoon_rate_for_pavilion(pavilion: PointOfInterest) {
        assert_eq!(current_success_rate(&pavilion, 14), 23);
    }

    #[rstest]
    fn hours_wrap_past_midnight(pavilion: PointOfInterest) {
        assert_eq!(
            current_success_rate(&pavilion, 38),
            current_success_rate(&pavilion, 14)
        );
    }

    #[rstest]
    #[case(0, 0, MIN_SUCCESS_RATE)]
    #[case(100, 0, MAX_SUCCESS_RATE)]
    #[case(100, 100, MIN_SUCCESS_RATE)]
    #[case(0, 100, MIN_SUCCESS_RATE)]
    #[case(60, 50, 30)]
    #[case(250, -40, MAX_SUCCESS_RATE)]
    #[case(-20, 10, MIN_SUCCESS_RATE)]
    #[case(80, 180, MIN_SUCCESS_RATE)]
    fn clamps_into_product_bounds(
        #[case] probability: i32,
        #[case] traffic: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(success_rate(probability, traffic), expected);
    }

    #[rstest]
    #[case(95, ChanceBand::High)]
    #[case(69, ChanceBand::Moderate)]
    #[case(50, ChanceBand::Moderate)]
    #[case(49, ChanceBand::Low)]
    #[case(30, ChanceBand::Low)]
    #[case(5, ChanceBand::Poor)]
    fn bands_follow_thresholds(#[case] rate: i32, #[case] expected: ChanceBand) {
        assert_eq!(ChanceBand::from_rate(rate), expected);
    }

    #[rstest]
    fn available_spots_scale_with_idle_fraction(pavilion: PointOfInterest) {
        // 1800 bays at 70 percent busy leaves 540.
        assert_eq!(available_spots(&pavilion, 14), 540);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(-5, 10)]
    #[case(40, 150)]
    fn available_spots_never_negative(#[case] capacity: i32, #[case] traffic: i32) {
        let poi = PointOfInterest::new(
            2,
            lat_lng(3.0, 101.0),
            capacity,
            50,
            TrafficProfile::flat(traffic),
        );
        assert_eq!(available_spots(&poi, 9), 0);
    }

    #[rstest]
    fn recorded_zero_traffic_frees_every_bay(mut pavilion: PointOfInterest) {
        pavilion.traffic.set_level(3, 0);
        assert_eq!(available_spots(&pavilion, 3), 1800);
    }

    #[rstest]
    fn day_progress_wraps_and_clamps() {
        assert_eq!(day_progress_percent(0, 0), 0.0);
        assert_eq!(day_progress_percent(24, 0), 0.0);
        assert_eq!(day_progress_percent(6, 90), day_progress_percent(6, 59));
    }
}
