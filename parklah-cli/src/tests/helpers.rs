//! Test helpers for writing catalogue fixtures to a temporary workspace.

use crate::catalogue::CatalogueEntry;
use camino::{Utf8Path, Utf8PathBuf};
use parklah_core::PointOfInterest;
use parklah_core::test_support::{jalan_p_ramlee, kuala_lumpur_catalogue};
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn entry_for(poi: &PointOfInterest) -> CatalogueEntry {
    CatalogueEntry {
        id: poi.id,
        name: poi.name.clone(),
        address: poi.address.clone(),
        is_legal: poi.is_legal,
        lat: poi.latitude(),
        lng: poi.longitude(),
        capacity: poi.capacity,
        finding_probability: poi.finding_probability,
        traffic_frequency: poi.traffic.levels().to_vec(),
    }
}

/// A temporary directory holding catalogue files.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_entries(&self, name: &str, entries: &[CatalogueEntry]) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(entries).expect("serialise catalogue");
        write_utf8(&path, &payload);
        path
    }

    /// Writes the Pavilion, KLCC and Jalan Alor spots, in that order.
    pub(super) fn kuala_lumpur(&self) -> Utf8PathBuf {
        let entries: Vec<CatalogueEntry> = kuala_lumpur_catalogue().iter().map(entry_for).collect();
        self.write_entries("catalogue.json", &entries)
    }

    /// Writes the Kuala Lumpur spots followed by the Jalan P. Ramlee
    /// roadside spot.
    pub(super) fn kuala_lumpur_with_roadside(&self) -> Utf8PathBuf {
        let mut spots = kuala_lumpur_catalogue();
        spots.push(jalan_p_ramlee());
        let entries: Vec<CatalogueEntry> = spots.iter().map(entry_for).collect();
        self.write_entries("roadside.json", &entries)
    }
}
