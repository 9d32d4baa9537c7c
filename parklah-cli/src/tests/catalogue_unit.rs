//! Unit tests for catalogue loading and validation.

use super::helpers::{Workspace, entry_for, write_utf8};
use super::*;
use crate::catalogue::load_catalogue;
use parklah_core::TrafficProfileError;
use parklah_core::test_support::{jalan_alor, pavilion};
use rstest::rstest;

#[rstest]
fn loads_spots_in_file_order() {
    let workspace = Workspace::new();
    let path = workspace.kuala_lumpur();

    let spots = load_catalogue(&path).expect("catalogue should load");
    let ids: Vec<u64> = spots.iter().map(|poi| poi.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(spots.first().expect("first spot"), &pavilion());
}

#[rstest]
fn ignores_fields_the_engine_does_not_model() {
    let workspace = Workspace::new();
    let path = workspace.path("extra.json");
    let profile = vec!["10"; 24].join(",");
    let payload = format!(
        r#"[{{"id":7,"name":"Berjaya Times Square Parking","lat":3.142222,"lng":101.710556,
            "capacity":2200,"pricePerHour":4,"isLegal":true,"findingProbability":90,
            "trafficFrequency":[{profile}]}}]"#
    );
    write_utf8(&path, payload.as_bytes());

    let spots = load_catalogue(&path).expect("catalogue should load");
    let spot = spots.first().expect("one spot");
    assert_eq!(spot.id, 7);
    assert_eq!(spot.capacity, 2200);
    assert_eq!(spot.traffic_at(5), 10);
    assert!(spot.is_legal);
    assert!(spot.address.is_empty());
}

#[rstest]
fn reads_legality_and_address() {
    let workspace = Workspace::new();
    let path = workspace.path("roadside.json");
    let profile = vec!["40"; 24].join(",");
    let payload = format!(
        r#"[{{"id":10,"name":"Unauthorized - Jalan Raja Laut","address":"Jalan Raja Laut, 50350",
            "lat":3.1602,"lng":101.6958,"capacity":12,"isLegal":false,
            "findingProbability":85,"trafficFrequency":[{profile}]}}]"#
    );
    write_utf8(&path, payload.as_bytes());

    let spots = load_catalogue(&path).expect("catalogue should load");
    let spot = spots.first().expect("one spot");
    assert!(!spot.is_legal);
    assert_eq!(spot.address, "Jalan Raja Laut, 50350");
}

#[rstest]
fn missing_catalogue_is_reported() {
    let workspace = Workspace::new();
    let err = load_catalogue(&workspace.path("absent.json")).expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOGUE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_catalogue_is_rejected() {
    let workspace = Workspace::new();
    let path = workspace.path("catalogue.d");
    std::fs::create_dir(path.as_std_path()).expect("create directory");

    let err = load_catalogue(&path).expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOGUE),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_json_is_reported() {
    let workspace = Workspace::new();
    let path = workspace.path("broken.json");
    write_utf8(&path, b"[{ not valid json");

    let err = load_catalogue(&path).expect_err("expected parse failure");
    match err {
        CliError::ParseCatalogue { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalogue, found {other:?}"),
    }
}

#[rstest]
fn short_traffic_profile_names_the_entry() {
    let workspace = Workspace::new();
    let mut short = entry_for(&jalan_alor());
    short.traffic_frequency.truncate(12);
    let path = workspace.write_entries("short.json", &[entry_for(&pavilion()), short]);

    let err = load_catalogue(&path).expect_err("expected invalid entry");
    match err {
        CliError::InvalidCatalogueEntry { id, source, .. } => {
            assert_eq!(id, 3);
            assert_eq!(
                source,
                TrafficProfileError::WrongLength {
                    expected: 24,
                    found: 12
                }
            );
        }
        other => panic!("expected InvalidCatalogueEntry, found {other:?}"),
    }
}
