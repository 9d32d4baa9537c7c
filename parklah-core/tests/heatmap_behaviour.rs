//! Behavioural tests for heatmap sampling.

use parklah_core::test_support::{SequenceRandomSource, klcc};
use parklah_core::{
    HeatmapSample, PointOfInterest, TrafficProfile, generate_heatmap_points, lat_lng,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[fixture]
fn spots() -> RefCell<Vec<PointOfInterest>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn samples() -> RefCell<Vec<HeatmapSample>> {
    RefCell::new(Vec::new())
}

#[given("a spot with no capacity and 60 percent traffic")]
fn given_empty_spot(#[from(spots)] spots: &RefCell<Vec<PointOfInterest>>) {
    *spots.borrow_mut() = vec![PointOfInterest::new(
        9,
        lat_lng(3.15, 101.71),
        0,
        50,
        TrafficProfile::flat(60),
    )];
}

#[given("no spots")]
fn given_no_spots(#[from(spots)] spots: &RefCell<Vec<PointOfInterest>>) {
    spots.borrow_mut().clear();
}

#[given("the KLCC car park")]
fn given_klcc(#[from(spots)] spots: &RefCell<Vec<PointOfInterest>>) {
    *spots.borrow_mut() = vec![klcc()];
}

#[when("heatmap samples are generated")]
fn when_generated(
    #[from(spots)] spots: &RefCell<Vec<PointOfInterest>>,
    #[from(samples)] samples: &RefCell<Vec<HeatmapSample>>,
) {
    let mut rng = SequenceRandomSource::new([0.1, 0.7, 0.4, 0.95]);
    *samples.borrow_mut() = generate_heatmap_points(&spots.borrow(), 17, &mut rng);
}

#[then("exactly one sample is produced")]
fn then_one(#[from(samples)] samples: &RefCell<Vec<HeatmapSample>>) {
    assert_eq!(samples.borrow().len(), 1);
}

#[then("the anchor weight is 1.2")]
fn then_anchor_weight(#[from(samples)] samples: &RefCell<Vec<HeatmapSample>>) {
    let borrow = samples.borrow();
    let anchor = borrow.first().expect("anchor sample");
    assert!((anchor.weight - 1.2).abs() < 1e-12);
}

#[then("no samples are produced")]
fn then_none(#[from(samples)] samples: &RefCell<Vec<HeatmapSample>>) {
    assert!(samples.borrow().is_empty());
}

#[then("181 samples are produced")]
fn then_full_cloud(#[from(samples)] samples: &RefCell<Vec<HeatmapSample>>) {
    assert_eq!(samples.borrow().len(), 181);
}

#[then("every weight lies between 0 and 2")]
fn then_weights_bounded(#[from(samples)] samples: &RefCell<Vec<HeatmapSample>>) {
    assert!(
        samples
            .borrow()
            .iter()
            .all(|sample| (0.0..=2.0).contains(&sample.weight))
    );
}

#[scenario(path = "tests/features/heatmap.feature", index = 0)]
fn anchor_only(spots: RefCell<Vec<PointOfInterest>>, samples: RefCell<Vec<HeatmapSample>>) {
    let _ = (spots, samples);
}

#[scenario(path = "tests/features/heatmap.feature", index = 1)]
fn no_spots(spots: RefCell<Vec<PointOfInterest>>, samples: RefCell<Vec<HeatmapSample>>) {
    let _ = (spots, samples);
}

#[scenario(path = "tests/features/heatmap.feature", index = 2)]
fn large_car_park(spots: RefCell<Vec<PointOfInterest>>, samples: RefCell<Vec<HeatmapSample>>) {
    let _ = (spots, samples);
}
