//! Request validation at the boundary.
//!
//! These types carry raw, string-typed input as it arrives from a caller
//! (command-line arguments, a JSON body) and turn it into the validated
//! types the service accepts. Malformed input never reaches the store.

use serde::{Deserialize, Serialize};

use crate::booking::{BookingDate, BookingId, BookingName, DateRange, ValidationError};

/// A raw request to book a date.
///
/// # Examples
///
/// ```
/// use slotbook::request::CreateBookingRequest;
///
/// let request: CreateBookingRequest =
///     serde_json::from_str(r#"{"date": "2030-01-01", "name": " Alice "}"#).unwrap();
/// let valid = request.validate().unwrap();
/// assert_eq!(valid.name.unwrap().as_str(), "Alice");
///
/// let bad = CreateBookingRequest { date: "bad".into(), name: None };
/// assert_eq!(bad.validate().unwrap_err().message, "date must be YYYY-MM-DD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The date to book, `YYYY-MM-DD`.
    pub date: String,
    /// Optional label; trimmed, blank means absent.
    #[serde(default)]
    pub name: Option<String>,
}

/// A validated booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCreateBooking {
    /// The date to book.
    pub date: BookingDate,
    /// The normalized label.
    pub name: Option<BookingName>,
}

impl CreateBookingRequest {
    /// Validates the date and normalizes the name.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: a malformed date, then an
    /// over-long name.
    pub fn validate(&self) -> Result<ValidCreateBooking, ValidationError> {
        let date = BookingDate::parse_field(&self.date, "date")?;
        let name = BookingName::normalize(self.name.as_deref())?;
        Ok(ValidCreateBooking { date, name })
    }
}

/// A raw date-range query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBookingsRequest {
    /// First date, `YYYY-MM-DD`.
    pub from: String,
    /// Last date, `YYYY-MM-DD`.
    pub to: String,
}

impl ListBookingsRequest {
    /// Validates both bounds and their order.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is malformed or `from` is after `to`.
    pub fn validate(&self) -> Result<DateRange, ValidationError> {
        let from = BookingDate::parse_field(&self.from, "from")?;
        let to = BookingDate::parse_field(&self.to, "to")?;
        DateRange::new(from, to)
    }
}

/// A raw cancellation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookingRequest {
    /// The booking id, as given by the caller.
    pub id: String,
}

impl DeleteBookingRequest {
    /// Parses the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not a well-formed integer. A well-formed
    /// id that matches no booking is not an error.
    pub fn validate(&self) -> Result<BookingId, ValidationError> {
        self.id.parse()
    }
}
