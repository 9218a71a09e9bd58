// Test-only helpers for `norad-cli` unit tests

use std::path::PathBuf;

use norad_lib::{load_snapshot, Catalog};

/// Path to the checked-in universe report.
pub fn fixture_snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/snapshot.json")
}

/// The fixture snapshot decoded into a catalog.
pub fn fixture_catalog() -> Catalog {
    load_snapshot(&fixture_snapshot_path()).expect("fixture snapshot loads")
}
