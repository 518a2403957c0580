//! Common types used across the platform

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format of every date stored in the dataset
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date range for queries
///
/// Both bounds are opaque `YYYY-MM-DD` text compared lexicographically by the
/// store. Neither bound is validated: an inverted or malformed range simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: Option<String>,
}

impl DateRange {
    /// Range from `start` up to the dataset's latest date
    pub fn from_start(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    /// Closed range, inclusive on both ends
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    /// The `days`-long window ending on `reference`, inclusive on both ends.
    ///
    /// A 365 day window ending 2017-08-23 starts 2016-08-24. Returns `None`
    /// when `reference` is not a `YYYY-MM-DD` date or `days` is not positive.
    pub fn trailing(reference: &str, days: i64) -> Option<Self> {
        if days <= 0 {
            return None;
        }
        let end = NaiveDate::parse_from_str(reference, DATE_FORMAT).ok()?;
        let start = end.checked_sub_signed(Duration::try_days(days - 1)?)?;

        Some(Self::between(
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trailing_year_matches_dataset_horizon() {
        let window = DateRange::trailing("2017-08-23", 365).unwrap();
        assert_eq!(window, DateRange::between("2016-08-24", "2017-08-23"));
    }

    #[test]
    fn test_trailing_across_leap_day() {
        let window = DateRange::trailing("2016-03-01", 2).unwrap();
        assert_eq!(window.start, "2016-02-29");
    }

    #[test]
    fn test_trailing_single_day() {
        let window = DateRange::trailing("2017-01-05", 1).unwrap();
        assert_eq!(window, DateRange::between("2017-01-05", "2017-01-05"));
    }

    #[test]
    fn test_trailing_rejects_bad_input() {
        assert!(DateRange::trailing("not-a-date", 365).is_none());
        assert!(DateRange::trailing("2017-08-23 00:00:00", 365).is_none());
        assert!(DateRange::trailing("2017-08-23", 0).is_none());
    }

    #[test]
    fn test_from_start_has_open_end() {
        let range = DateRange::from_start("2017-01-01");
        assert_eq!(range.start, "2017-01-01");
        assert!(range.end.is_none());
    }

    proptest! {
        /// Property: window bounds are ordered and formatted like the dataset
        #[test]
        fn prop_trailing_bounds_ordered(
            year in 1950i32..2100,
            ordinal in 1u32..365,
            days in 1i64..2000,
        ) {
            let reference = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let reference = reference.format(DATE_FORMAT).to_string();

            let window = DateRange::trailing(&reference, days).unwrap();
            let end = window.end.clone().unwrap();

            prop_assert_eq!(&end, &reference);
            prop_assert!(window.start <= end);
            prop_assert_eq!(window.start.len(), 10);
        }
    }
}
