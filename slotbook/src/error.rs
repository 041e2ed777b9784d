//! Error types for the slotbook library.
//!
//! This module provides the error hierarchy shared by the booking store,
//! the booking service and the configuration layer, using `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

use crate::booking::{BookingDate, ValidationError};

/// Result type alias for operations that may fail with a slotbook error.
///
/// # Examples
///
/// ```
/// use slotbook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the slotbook library.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: a bad date, a non-integer id, an over-long name.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The date already has a live booking.
    #[error("date already booked: {date}")]
    ReservationConflict {
        /// The date that was requested.
        date: BookingDate,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database stayed locked for longer than the busy timeout.
    #[error("database lock timeout after {millis}ms")]
    LockTimeout {
        /// The number of milliseconds waited before giving up.
        millis: u64,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error is a booking conflict on an already-booked date.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::{BookingDate, Error};
    ///
    /// let date: BookingDate = "2030-01-01".parse().unwrap();
    /// let err = Error::ReservationConflict { date };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReservationConflict { .. })
    }

    /// Check if error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
