//! Property-based tests for the booking value types.

use super::{BookingDate, BookingName, DateRange, MAX_NAME_LENGTH};
use chrono::NaiveDate;
use proptest::prelude::*;

// Days between 1900-01-01 and 2099-12-31
fn date_strategy() -> impl Strategy<Value = BookingDate> {
    (0i64..73_048).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        BookingDate::from(base + chrono::Duration::days(offset))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Display and parse agree for every representable date
    #[test]
    fn date_text_roundtrip(date in date_strategy()) {
        let text = date.to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(text.parse::<BookingDate>().unwrap(), date);
    }

    // Lexical order of the stored text equals chronological order
    #[test]
    fn date_text_order_is_chronological(a in date_strategy(), b in date_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    // Range membership is exactly from <= date <= to
    #[test]
    fn range_contains_iff_between_bounds(
        a in date_strategy(),
        b in date_strategy(),
        probe in date_strategy(),
    ) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let range = DateRange::new(from, to).unwrap();
        prop_assert_eq!(range.contains(probe), from <= probe && probe <= to);
    }

    // Inverted bounds are always rejected, never swapped
    #[test]
    fn range_rejects_inverted(a in date_strategy(), b in date_strategy()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(DateRange::new(hi, lo).is_err());
    }

    // Normalized names are trimmed, non-empty and within the cap
    #[test]
    fn name_normalization_invariants(raw in "\\PC{0,130}", pad_left in " {0,5}", pad_right in "\\s{0,5}") {
        let input = format!("{pad_left}{raw}{pad_right}");
        let trimmed = input.trim();

        match BookingName::normalize(Some(&input)) {
            Ok(Some(name)) => {
                prop_assert_eq!(name.as_str(), trimmed);
                prop_assert!(!name.as_str().is_empty());
                prop_assert!(name.as_str().chars().count() <= MAX_NAME_LENGTH);
            }
            Ok(None) => prop_assert!(trimmed.is_empty()),
            Err(err) => {
                prop_assert_eq!(err.field.as_str(), "name");
                prop_assert!(trimmed.chars().count() > MAX_NAME_LENGTH);
            }
        }
    }

    // Normalizing twice is the same as normalizing once
    #[test]
    fn name_normalization_idempotent(raw in "\\s{0,3}[a-zA-Z ]{0,40}\\s{0,3}") {
        let once = BookingName::normalize(Some(&raw)).unwrap();
        let twice = BookingName::normalize(once.as_ref().map(BookingName::as_str)).unwrap();
        prop_assert_eq!(once, twice);
    }
}
