//! Booking store backed by `SQLite`.
//!
//! This module owns persisted booking state: connection management, schema
//! versioning, and the store operations. It is the only place identifiers
//! are allocated and the only place the one-booking-per-date rule is
//! enforced.
//!
//! # Examples
//!
//! ```no_run
//! use slotbook::database::{Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/slotbook.db")).unwrap();
//!
//! let booking = db.insert_booking("2030-01-01".parse().unwrap(), None).unwrap();
//! let january = db
//!     .list_bookings_in_range("2030-01-01".parse().unwrap(), "2030-01-31".parse().unwrap())
//!     .unwrap();
//! assert_eq!(january, vec![booking.clone()]);
//!
//! db.delete_booking(booking.id()).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATA_DIR_ENV,
    DEFAULT_DATABASE_FILE, MAX_BUSY_TIMEOUT_SECONDS,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
