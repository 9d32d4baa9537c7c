//! Deterministic fixtures shared by unit and behaviour tests.

use crate::{PointOfInterest, RandomSource, TrafficProfile, lat_lng};

/// `RandomSource` that replays a fixed sequence of values.
///
/// The sequence wraps around once exhausted. An empty sequence always
/// yields `0.5`, which centres jitter and picks the right-hand side street.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceRandomSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandomSource {
    /// Replay `values` in order, wrapping at the end.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Always yield `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(std::iter::once(value))
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_unit(&mut self) -> f64 {
        let Some(value) = self.values.get(self.cursor).copied() else {
            return 0.5;
        };
        self.cursor = self
            .cursor
            .checked_add(1)
            .and_then(|next| next.checked_rem(self.values.len()))
            .unwrap_or(0);
        value
    }
}

/// A spot with flat 50 percent traffic, capacity 100 and 50 percent
/// finding probability.
#[must_use]
pub const fn spot(id: u64, latitude: f64, longitude: f64) -> PointOfInterest {
    PointOfInterest::new(
        id,
        lat_lng(latitude, longitude),
        100,
        50,
        TrafficProfile::flat(50),
    )
}

/// Pavilion KL multi-storey car park.
#[must_use]
pub fn pavilion() -> PointOfInterest {
    PointOfInterest::new(
        1,
        lat_lng(3.149_213_9, 101.713_527_8),
        1800,
        75,
        TrafficProfile::new([
            20, 15, 10, 8, 12, 25, 45, 65, 80, 85, 90, 95, 85, 75, 70, 80, 85, 90, 85, 70, 55, 40,
            30, 25,
        ]),
    )
    .with_name("Pavilion KL Parking")
    .with_address("Jalan Bukit Bintang, Bukit Bintang")
}

/// Suria KLCC mall car park.
#[must_use]
pub fn klcc() -> PointOfInterest {
    PointOfInterest::new(
        2,
        lat_lng(3.157_375_1, 101.712_380_8),
        5400,
        85,
        TrafficProfile::new([
            15, 10, 8, 5, 10, 20, 40, 70, 85, 95, 98, 95, 90, 85, 80, 85, 90, 95, 90, 75, 60, 45,
            30, 20,
        ]),
    )
    .with_name("KLCC Suria Mall Parking")
    .with_address("Kuala Lumpur City Centre, 50088")
}

/// Street parking on Jalan Alor; small and busy in the evening.
#[must_use]
pub fn jalan_alor() -> PointOfInterest {
    PointOfInterest::new(
        3,
        lat_lng(3.145_872_2, 101.708_908_7),
        40,
        35,
        TrafficProfile::new([
            10, 8, 5, 5, 8, 15, 25, 35, 40, 45, 50, 55, 60, 65, 70, 75, 85, 95, 90, 80, 70, 50,
            30, 15,
        ]),
    )
    .with_name("Street Parking - Jalan Alor")
    .with_address("Jalan Alor, Bukit Bintang, 50200")
}

/// Roadside spot on Jalan P. Ramlee where parking risks a summons.
///
/// Not part of [`kuala_lumpur_catalogue`].
#[must_use]
pub fn jalan_p_ramlee() -> PointOfInterest {
    PointOfInterest::new(
        4,
        lat_lng(3.155_023_4, 101.708_640_7),
        15,
        80,
        TrafficProfile::new([
            5, 5, 5, 5, 10, 20, 40, 80, 90, 85, 80, 75, 70, 75, 80, 85, 90, 85, 70, 50, 30, 20, 10,
            8,
        ]),
    )
    .with_name("Unauthorized - Jalan P. Ramlee")
    .with_address("Jalan P. Ramlee, Golden Triangle, 50250")
    .with_legality(false)
}

/// The three legal sample spots in catalogue order.
#[must_use]
pub fn kuala_lumpur_catalogue() -> Vec<PointOfInterest> {
    vec![pavilion(), klcc(), jalan_alor()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps() {
        let mut source = SequenceRandomSource::new([0.1, 0.9]);
        let drawn: Vec<f64> = (0..5).map(|_| source.next_unit()).collect();
        assert_eq!(drawn, vec![0.1, 0.9, 0.1, 0.9, 0.1]);
    }

    #[test]
    fn empty_sequence_is_centred() {
        let mut source = SequenceRandomSource::default();
        assert_eq!(source.next_unit(), 0.5);
    }
}
