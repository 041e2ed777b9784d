//! The booking service.
//!
//! `BookingService` turns validated requests into store operations. It holds
//! no state of its own besides the store handle it was built with, so every
//! call round-trips to the database.

use crate::booking::{Booking, BookingDate, BookingId, BookingName, DateRange};
use crate::database::Database;
use crate::error::Result;

/// Orchestrates bookings on top of a [`Database`] handle.
///
/// # Examples
///
/// ```
/// use slotbook::{BookingService, Database, DateRange};
///
/// let service = BookingService::new(Database::open_in_memory().unwrap());
///
/// let date = "2030-01-01".parse().unwrap();
/// let booking = service.create_raw(date, Some("Alice")).unwrap();
///
/// let listed = service.list(&DateRange::new(date, date).unwrap()).unwrap();
/// assert_eq!(listed, vec![booking.clone()]);
///
/// service.cancel(booking.id()).unwrap();
/// assert!(service.lookup(date).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct BookingService {
    db: Database,
}

impl BookingService {
    /// Creates a service over the given store handle.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Books `date`.
    ///
    /// There is no "is the date free?" query before the insert;
    /// the store rejects the second booking for a date atomically.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ReservationConflict`] if the date is already
    /// booked. Conflicts are never retried.
    pub fn create(&self, date: BookingDate, name: Option<BookingName>) -> Result<Booking> {
        log::debug!("create booking request for {date}");

        match self.db.insert_booking(date, name.as_ref()) {
            Ok(booking) => {
                log::info!("booked {} as #{}", booking.date(), booking.id());
                Ok(booking)
            }
            Err(err) => {
                if err.is_conflict() {
                    log::info!("rejected booking for {date}: already booked");
                } else {
                    log::error!("failed to book {date}: {err}");
                }
                Err(err)
            }
        }
    }

    /// Books `date` with a raw, not yet normalized label.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the label is too long, otherwise the
    /// same errors as [`BookingService::create`].
    pub fn create_raw(&self, date: BookingDate, raw_name: Option<&str>) -> Result<Booking> {
        let name = BookingName::normalize(raw_name)?;
        self.create(date, name)
    }

    /// Lists bookings in `range`, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn list(&self, range: &DateRange) -> Result<Vec<Booking>> {
        log::debug!("list bookings in {range}");
        self.db.list_bookings_in_range(range.from(), range.to())
    }

    /// Cancels a booking.
    ///
    /// Succeeds whether or not a booking with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails.
    pub fn cancel(&self, id: BookingId) -> Result<()> {
        if self.db.delete_booking(id)? {
            log::info!("cancelled booking #{id}");
        } else {
            log::debug!("cancel for #{id}: no such booking");
        }
        Ok(())
    }

    /// Returns the booking for `date`, if the date is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub fn lookup(&self, date: BookingDate) -> Result<Option<Booking>> {
        self.db.get_booking_by_date(date)
    }

    /// Returns the underlying store handle.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Consumes the service and returns the store handle.
    #[must_use]
    pub fn into_database(self) -> Database {
        self.db
    }
}
