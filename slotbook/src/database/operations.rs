//! Store operations for bookings.
//!
//! Every operation here is a single SQL statement, so each one is atomic on
//! its own and no explicit transaction is needed. In particular the
//! one-booking-per-date rule is enforced by the UNIQUE constraint during the
//! `INSERT` itself; nothing reads the table first to see whether the date is
//! free.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use rusqlite::{ffi, params, ErrorCode, OptionalExtension};

use crate::booking::{Booking, BookingDate, BookingId, BookingName};
use crate::error::{Error, Result};

use super::connection::Database;
use super::schema::{
    DELETE_BOOKING, INSERT_BOOKING, SELECT_BOOKINGS_IN_RANGE, SELECT_BOOKING_BY_DATE,
    SELECT_BOOKING_BY_ID,
};

/// Formats a creation timestamp for storage (RFC 3339, milliseconds, `Z`).
fn timestamp_to_text(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Helper function to deserialize a booking from a database row.
///
/// Expects row fields in this order: id, date, name, `created_at`
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let id: i64 = row.get(0)?;
    let date_text: String = row.get(1)?;
    let name_text: Option<String> = row.get(2)?;
    let created_text: String = row.get(3)?;

    let date = date_text
        .parse::<BookingDate>()
        .map_err(|e| conversion_error(1, e))?;
    let name = BookingName::normalize(name_text.as_deref()).map_err(|e| conversion_error(2, e))?;
    let created_at = DateTime::parse_from_rfc3339(&created_text)
        .map_err(|e| conversion_error(3, e))?
        .with_timezone(&Utc);

    Ok(Booking::from_parts(BookingId::new(id), date, name, created_at))
}

/// Returns `true` if the error is a UNIQUE constraint violation.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Database {
    /// Inserts a new booking and returns it with its assigned id and
    /// creation time.
    ///
    /// The check that the date is free and the write happen in one `INSERT`
    /// statement. Of any number of concurrent callers inserting the same
    /// date, exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationConflict`] if the date already has a live
    /// booking, [`Error::LockTimeout`] if the database stayed locked past the
    /// busy timeout, or a database error for other storage failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::{BookingName, Database};
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let name = BookingName::normalize(Some("Alice")).unwrap();
    ///
    /// let booking = db.insert_booking("2030-01-01".parse().unwrap(), name.as_ref()).unwrap();
    /// assert_eq!(booking.name().map(|n| n.as_str()), Some("Alice"));
    ///
    /// let err = db.insert_booking("2030-01-01".parse().unwrap(), None).unwrap_err();
    /// assert!(err.is_conflict());
    /// ```
    pub fn insert_booking(&self, date: BookingDate, name: Option<&BookingName>) -> Result<Booking> {
        let created_at = Utc::now().trunc_subsecs(3);

        let mut stmt = self
            .conn
            .prepare_cached(INSERT_BOOKING)
            .map_err(|e| self.storage_error(e))?;

        match stmt.execute(params![
            date.to_string(),
            name.map(BookingName::as_str),
            timestamp_to_text(created_at),
        ]) {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                log::debug!("insert for {date} rejected by unique constraint");
                return Err(Error::ReservationConflict { date });
            }
            Err(e) => return Err(self.storage_error(e)),
        }

        let id = BookingId::new(self.conn.last_insert_rowid());
        Ok(Booking::from_parts(id, date, name.cloned(), created_at))
    }

    /// Lists bookings with `from <= date <= to`, ascending by date.
    ///
    /// Bounds are not validated here: when `from` is after `to` the query
    /// simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub fn list_bookings_in_range(&self, from: BookingDate, to: BookingDate) -> Result<Vec<Booking>> {
        let mut stmt = self
            .conn
            .prepare_cached(SELECT_BOOKINGS_IN_RANGE)
            .map_err(|e| self.storage_error(e))?;

        let bookings = stmt
            .query_map(params![from.to_string(), to.to_string()], row_to_booking)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| self.storage_error(e))?;

        Ok(bookings)
    }

    /// Deletes the booking with the given id.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage layer fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a booking was removed
    /// - `Ok(false)` if there was nothing to remove
    pub fn delete_booking(&self, id: BookingId) -> Result<bool> {
        let rows_affected = self
            .conn
            .prepare_cached(DELETE_BOOKING)
            .and_then(|mut stmt| stmt.execute(params![id.value()]))
            .map_err(|e| self.storage_error(e))?;

        Ok(rows_affected > 0)
    }

    /// Retrieves the booking for a date, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking_by_date(&self, date: BookingDate) -> Result<Option<Booking>> {
        self.conn
            .prepare_cached(SELECT_BOOKING_BY_DATE)
            .and_then(|mut stmt| {
                stmt.query_row(params![date.to_string()], row_to_booking)
                    .optional()
            })
            .map_err(|e| self.storage_error(e))
    }

    /// Retrieves a booking by id, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(&self, id: BookingId) -> Result<Option<Booking>> {
        self.conn
            .prepare_cached(SELECT_BOOKING_BY_ID)
            .and_then(|mut stmt| stmt.query_row(params![id.value()], row_to_booking).optional())
            .map_err(|e| self.storage_error(e))
    }

    /// Runs `PRAGMA integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if `SQLite` reports anything
    /// other than `ok`.
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}
