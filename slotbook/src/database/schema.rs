//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and statements
//! used by the booking store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the bookings table.
///
/// `AUTOINCREMENT` keeps identifiers strictly increasing and never reused
/// after a delete. The UNIQUE constraint on `date` is the only thing that
/// enforces one booking per day; its implicit index also serves range scans.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL UNIQUE,
        name TEXT,
        created_at TEXT NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking.
///
/// Plain `INSERT`: a second booking for the same date must fail on the
/// UNIQUE constraint rather than replace the first.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings (date, name, created_at)
    VALUES (?1, ?2, ?3)
";

/// SQL statement to list bookings in an inclusive date range.
pub const SELECT_BOOKINGS_IN_RANGE: &str = r"
    SELECT id, date, name, created_at
    FROM bookings
    WHERE date >= ?1 AND date <= ?2
    ORDER BY date ASC
";

/// SQL statement to select the booking for one date.
pub const SELECT_BOOKING_BY_DATE: &str = r"
    SELECT id, date, name, created_at
    FROM bookings
    WHERE date = ?1
";

/// SQL statement to select a booking by identifier.
pub const SELECT_BOOKING_BY_ID: &str = r"
    SELECT id, date, name, created_at
    FROM bookings
    WHERE id = ?1
";

/// SQL statement to delete a booking by identifier.
pub const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE id = ?1";
