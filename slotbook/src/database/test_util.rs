//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use crate::database::Database;
use crate::{BookingDate, BookingName};

/// Creates an isolated in-memory test database.
///
/// # Panics
///
/// Panics if the database cannot be opened.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    Database::open_in_memory().unwrap()
}

/// Parses a `YYYY-MM-DD` literal.
///
/// # Panics
///
/// Panics on a malformed literal.
#[must_use]
pub fn date(s: &str) -> BookingDate {
    s.parse().unwrap()
}

/// Builds a normalized booking name.
///
/// # Panics
///
/// Panics if the name is too long.
#[must_use]
pub fn name(s: &str) -> Option<BookingName> {
    BookingName::normalize(Some(s)).unwrap()
}
