//! Calendar-day filter helpers.
//!
//! The image listing API accepts a `date=YYYY-MM-DD` filter meaning "records
//! created on that UTC day". This module turns such a string into a half-open
//! timestamp range suitable for `created_at >= start AND created_at < end`.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Parse a `YYYY-MM-DD` string into the UTC day range `[00:00:00, next day 00:00:00)`.
///
/// Surrounding whitespace is tolerated. Anything that does not parse as a
/// calendar date yields a [`CoreError::Validation`].
pub fn utc_day_bounds(input: &str) -> Result<(Timestamp, Timestamp), CoreError> {
    let day = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::Validation("Invalid date: expected YYYY-MM-DD".into()))?;

    let next_day = day
        .succ_opt()
        .ok_or_else(|| CoreError::Validation("Date out of supported range".into()))?;

    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = next_day.and_time(NaiveTime::MIN).and_utc();
    Ok((start, end))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn parses_a_plain_day() {
        let (start, end) = utc_day_bounds("2024-01-15").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn upper_bound_rolls_over_month_and_year() {
        let (_, end) = utc_day_bounds("2024-01-31").unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        let (_, end) = utc_day_bounds("2023-12-31").unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn handles_leap_day() {
        let (start, end) = utc_day_bounds("2024-02-29").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let (start, _) = utc_day_bounds("  2024-01-15 ").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(utc_day_bounds("not-a-date"), Err(CoreError::Validation(_)));
        assert_matches!(utc_day_bounds(""), Err(CoreError::Validation(_)));
        assert_matches!(utc_day_bounds("2024-13-01"), Err(CoreError::Validation(_)));
        assert_matches!(utc_day_bounds("2024-02-30"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_datetime_strings() {
        // Only bare calendar dates are accepted; trailing time parts are not.
        assert_matches!(
            utc_day_bounds("2024-01-15T10:30:00Z"),
            Err(CoreError::Validation(_))
        );
    }
}
