//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use slotbook::{BookingDate, BookingName, Database, DatabaseConfig};
use tempfile::TempDir;

/// A temporary data directory holding one database file.
///
/// Several handles can be opened onto the same file to simulate concurrent
/// writers. The directory is removed when the value is dropped.
#[allow(dead_code)]
pub struct TestStore {
    pub temp_dir: TempDir,
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("slotbook.db");
        let store = Self { temp_dir, db_path };
        // Create the schema once so later opens never race on it
        store.open();
        store
    }

    pub fn open(&self) -> Database {
        Database::open(DatabaseConfig::new(&self.db_path)).unwrap()
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

/// Parses a `YYYY-MM-DD` literal.
#[allow(dead_code)]
pub fn date(s: &str) -> BookingDate {
    s.parse().unwrap()
}

/// Normalizes a label literal.
#[allow(dead_code)]
pub fn name(s: &str) -> Option<BookingName> {
    BookingName::normalize(Some(s)).unwrap()
}
