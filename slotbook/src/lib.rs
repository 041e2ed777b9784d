#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # slotbook
//!
//! A library for booking a single shared car-park slot by calendar date.
//!
//! At most one booking exists per date. The booking store enforces this
//! atomically, so concurrent attempts to book the same date produce exactly
//! one success; every other attempt fails with
//! [`Error::ReservationConflict`].
//!
//! ## Core Types
//!
//! - [`Booking`], [`BookingId`], [`BookingDate`] and [`BookingName`]: the booking model
//! - [`DateRange`]: inclusive range queries
//! - [`Database`]: the `SQLite`-backed booking store
//! - [`BookingService`]: create, list and cancel on top of the store
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use slotbook::{BookingService, Database, DateRange, Error};
//!
//! let service = BookingService::new(Database::open_in_memory().unwrap());
//! let date = "2030-01-01".parse().unwrap();
//!
//! service.create_raw(date, Some("Alice")).unwrap();
//! let second = service.create_raw(date, Some("Bob"));
//! assert!(matches!(second, Err(Error::ReservationConflict { .. })));
//!
//! let range = DateRange::new(date, date).unwrap();
//! assert_eq!(service.list(&range).unwrap().len(), 1);
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod init;
pub mod logging;
pub mod request;
pub mod service;

// Re-export key types at crate root for convenience
pub use booking::{
    Booking, BookingDate, BookingId, BookingName, DateRange, ValidationError, MAX_NAME_LENGTH,
};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use init::{init_data_dir, InitOptions, InitResult};
pub use logging::{init_logger, LogLevel, Logger};
pub use request::{CreateBookingRequest, DeleteBookingRequest, ListBookingsRequest};
pub use service::BookingService;
