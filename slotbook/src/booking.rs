//! Booking types for the shared car-park slot.
//!
//! This module provides the `Booking` record together with the validated
//! value types it is built from: identifiers, calendar dates, optional
//! labels and inclusive date ranges.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// Maximum length of a booking name, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 120;

/// Wire format of a booking date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A system-assigned booking identifier.
///
/// Identifiers are allocated by the store and increase monotonically in
/// creation order. They are never reused, even after the booking is deleted.
///
/// # Examples
///
/// ```
/// use slotbook::BookingId;
///
/// let id: BookingId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert!("forty-two".parse::<BookingId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for BookingId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|_| ValidationError {
            field: "id".into(),
            message: "Invalid booking ID".into(),
        })
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar date without a timezone, transported as `YYYY-MM-DD`.
///
/// The textual form is always exactly ten characters, so lexical order of the
/// stored strings coincides with chronological order.
///
/// # Examples
///
/// ```
/// use slotbook::BookingDate;
///
/// let date: BookingDate = "2030-01-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2030-01-01");
///
/// assert!("2030-1-1".parse::<BookingDate>().is_err());
/// assert!("2030-02-30".parse::<BookingDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Parses a date, reporting failures against the given field name.
    ///
    /// # Errors
    ///
    /// Returns an error unless `s` is exactly `YYYY-MM-DD` and names a real
    /// calendar day.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotbook::BookingDate;
    ///
    /// let err = BookingDate::parse_field("bad", "from").unwrap_err();
    /// assert_eq!(err.field, "from");
    /// assert_eq!(err.message, "from must be YYYY-MM-DD");
    /// ```
    pub fn parse_field(s: &str, field: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError {
            field: field.into(),
            message: format!("{field} must be YYYY-MM-DD"),
        };

        if !has_date_shape(s) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Returns today's date in the local timezone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the date `days` days later, if it is still representable as
    /// a four-digit year.
    #[must_use]
    pub fn plus_days(self, days: u32) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days.into()))
            .filter(|d| d.format("%Y").to_string().len() == 4)
            .map(Self)
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

/// Checks the `DDDD-DD-DD` shape before handing the string to `chrono`,
/// which would otherwise accept unpadded fields such as `2030-1-1`.
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for BookingDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field(s, "date")
    }
}

impl TryFrom<String> for BookingDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookingDate> for String {
    fn from(date: BookingDate) -> Self {
        date.to_string()
    }
}

impl From<NaiveDate> for BookingDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// An optional short label attached to a booking.
///
/// A `BookingName` is always trimmed, non-empty and at most
/// [`MAX_NAME_LENGTH`] characters long.
///
/// # Examples
///
/// ```
/// use slotbook::BookingName;
///
/// let name = BookingName::normalize(Some("  Alice ")).unwrap();
/// assert_eq!(name.unwrap().as_str(), "Alice");
///
/// assert!(BookingName::normalize(Some("   ")).unwrap().is_none());
/// assert!(BookingName::normalize(None).unwrap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingName(String);

impl BookingName {
    /// Normalizes a raw label: trims it, treats empty input as absent and
    /// enforces the length cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed value is longer than
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn normalize(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        let Some(trimmed) = raw.map(str::trim) else {
            return Ok(None);
        };

        if trimmed.is_empty() {
            return Ok(None);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError {
                field: "name".into(),
                message: "name too long".into(),
            });
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookingName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(Some(&value))?.ok_or_else(|| ValidationError {
            field: "name".into(),
            message: "name must be non-empty after trimming whitespace".into(),
        })
    }
}

impl From<BookingName> for String {
    fn from(name: BookingName) -> Self {
        name.0
    }
}

impl fmt::Display for BookingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reservation of the shared slot for one calendar date.
///
/// Bookings are created by the store and never mutated afterwards. The wire
/// shape is `{"id", "date", "name", "created_at"}` with `name` serialized as
/// `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    date: BookingDate,
    name: Option<BookingName>,
    created_at: DateTime<Utc>,
}

impl Booking {
    pub(crate) fn from_parts(
        id: BookingId,
        date: BookingDate,
        name: Option<BookingName>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            date,
            name,
            created_at,
        }
    }

    /// Returns the booking identifier.
    #[must_use]
    pub const fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the booked date.
    #[must_use]
    pub const fn date(&self) -> BookingDate {
        self.date
    }

    /// Returns the optional label.
    #[must_use]
    pub fn name(&self) -> Option<&BookingName> {
        self.name.as_ref()
    }

    /// Returns when the store created this booking.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// An inclusive range of booking dates.
///
/// # Examples
///
/// ```
/// use slotbook::{BookingDate, DateRange};
///
/// let from: BookingDate = "2030-01-01".parse().unwrap();
/// let to: BookingDate = "2030-01-31".parse().unwrap();
/// let range = DateRange::new(from, to).unwrap();
///
/// assert!(range.contains("2030-01-15".parse().unwrap()));
/// assert!(!range.contains("2030-02-01".parse().unwrap()));
/// assert!(DateRange::new(to, from).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: BookingDate,
    to: BookingDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is after `to`. The bounds are never swapped.
    pub fn new(from: BookingDate, to: BookingDate) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError {
                field: "to".into(),
                message: format!("to ({to}) must not be before from ({from})"),
            });
        }
        Ok(Self { from, to })
    }

    /// Creates the range `start ..= start + days`.
    ///
    /// # Errors
    ///
    /// Returns an error if the end date is not representable.
    pub fn window_from(start: BookingDate, days: u32) -> Result<Self, ValidationError> {
        let end = start.plus_days(days).ok_or_else(|| ValidationError {
            field: "to".into(),
            message: format!("{days} days after {start} is out of range"),
        })?;
        Self::new(start, end)
    }

    /// Returns the first date of the range.
    #[must_use]
    pub const fn from(&self) -> BookingDate {
        self.from
    }

    /// Returns the last date of the range.
    #[must_use]
    pub const fn to(&self) -> BookingDate {
        self.to
    }

    /// Returns `true` if `date` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: BookingDate) -> bool {
        self.from <= date && date <= self.to
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> BookingDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_booking_id_parse() {
        assert_eq!("7".parse::<BookingId>().unwrap(), BookingId::new(7));
        assert_eq!("-3".parse::<BookingId>().unwrap().value(), -3);

        for bad in ["", "abc", "1.5", " 1", "1 ", "99999999999999999999"] {
            let err = bad.parse::<BookingId>().unwrap_err();
            assert_eq!(err.field, "id");
            assert_eq!(err.message, "Invalid booking ID");
        }
    }

    #[test]
    fn test_booking_date_accepts_well_formed() {
        assert_eq!(date("2030-01-01").to_string(), "2030-01-01");
        assert_eq!(date("2028-02-29").to_string(), "2028-02-29");
        assert_eq!(date("0999-12-31").to_string(), "0999-12-31");
    }

    #[test]
    fn test_booking_date_rejects_malformed() {
        for bad in [
            "bad",
            "2030-1-01",
            "2030-01-1",
            "20300101",
            "2030/01/01",
            "2030-13-01",
            "2030-02-30",
            "2029-02-29",
            " 2030-01-01",
            "2030-01-01T00:00:00",
            "+030-01-01",
        ] {
            let err = bad.parse::<BookingDate>().unwrap_err();
            assert_eq!(err.field, "date", "input {bad:?}");
            assert_eq!(err.message, "date must be YYYY-MM-DD");
        }
    }

    #[test]
    fn test_booking_date_order_matches_text_order() {
        let a = date("2029-12-31");
        let b = date("2030-01-01");
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_booking_date_plus_days() {
        assert_eq!(date("2030-12-31").plus_days(1), Some(date("2031-01-01")));
        assert_eq!(date("2030-01-01").plus_days(0), Some(date("2030-01-01")));
        assert_eq!(date("9999-12-31").plus_days(1), None);
    }

    #[test]
    fn test_booking_date_serde() {
        let json = serde_json::to_string(&date("2030-03-03")).unwrap();
        assert_eq!(json, "\"2030-03-03\"");

        let parsed: BookingDate = serde_json::from_str("\"2030-03-03\"").unwrap();
        assert_eq!(parsed, date("2030-03-03"));

        assert!(serde_json::from_str::<BookingDate>("\"2030-3-3\"").is_err());
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(BookingName::normalize(None).unwrap(), None);
        assert_eq!(BookingName::normalize(Some("")).unwrap(), None);
        assert_eq!(BookingName::normalize(Some(" \t\n")).unwrap(), None);
        assert_eq!(
            BookingName::normalize(Some("  Bob  ")).unwrap().unwrap().as_str(),
            "Bob"
        );
    }

    #[test]
    fn test_name_length_limit() {
        let exact = "x".repeat(MAX_NAME_LENGTH);
        assert!(BookingName::normalize(Some(&exact)).unwrap().is_some());

        let padded = format!("   {exact}   ");
        assert!(BookingName::normalize(Some(&padded)).unwrap().is_some());

        let too_long = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = BookingName::normalize(Some(&too_long)).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "name too long");
    }

    #[test]
    fn test_name_length_counts_characters() {
        let accented = "é".repeat(MAX_NAME_LENGTH);
        assert!(accented.len() > MAX_NAME_LENGTH);
        assert!(BookingName::normalize(Some(&accented)).unwrap().is_some());
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = DateRange::new(date("2030-01-10"), date("2030-01-20")).unwrap();
        assert!(range.contains(date("2030-01-10")));
        assert!(range.contains(date("2030-01-20")));
        assert!(!range.contains(date("2030-01-09")));
        assert!(!range.contains(date("2030-01-21")));
        assert_eq!(range.to_string(), "2030-01-10..=2030-01-20");
    }

    #[test]
    fn test_date_range_single_day() {
        let d = date("2030-05-05");
        let range = DateRange::new(d, d).unwrap();
        assert!(range.contains(d));
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let err = DateRange::new(date("2030-02-01"), date("2030-01-01")).unwrap_err();
        assert_eq!(err.field, "to");
    }

    #[test]
    fn test_date_range_window() {
        let range = DateRange::window_from(date("2030-01-01"), 60).unwrap();
        assert_eq!(range.from(), date("2030-01-01"));
        assert_eq!(range.to(), date("2030-03-02"));
        assert!(DateRange::window_from(date("9999-12-01"), 60).is_err());
    }

    #[test]
    fn test_booking_serializes_to_wire_shape() {
        let created_at = DateTime::parse_from_rfc3339("2030-01-01T08:30:00.125Z")
            .unwrap()
            .with_timezone(&Utc);
        let booking = Booking::from_parts(BookingId::new(1), date("2030-01-01"), None, created_at);

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["date"], "2030-01-01");
        assert!(value["name"].is_null());
        assert_eq!(value["created_at"], "2030-01-01T08:30:00.125Z");

        let back: Booking = serde_json::from_value(value).unwrap();
        assert_eq!(back, booking);
    }
}
