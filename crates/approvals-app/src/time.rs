// Rust guideline compliant 2026-10-18

//! Timestamp helpers.

use chrono::{DateTime, Datelike, Utc};

/// Returns the current Unix timestamp in milliseconds.
#[must_use]
pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats a submission instant for display, e.g. `Feb 1`.
///
/// The year is appended when it differs from the year of `now`. Instants
/// outside chrono's range render as `unknown`.
///
/// # Arguments
///
/// * `millis` - Submission time in epoch milliseconds
/// * `now` - Reference instant
#[must_use]
pub fn format_submitted(millis: i64, now: DateTime<Utc>) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(at) if at.year() == now.year() => at.format("%b %-d").to_string(),
        Some(at) => at.format("%b %-d, %Y").to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_same_year_omits_year() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let submitted = Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap();
        assert_eq!(format_submitted(submitted.timestamp_millis(), now), "Feb 1");
    }

    #[test]
    fn test_other_year_includes_year() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let submitted = Utc.with_ymd_and_hms(2025, 12, 24, 0, 0, 0).unwrap();
        assert_eq!(
            format_submitted(submitted.timestamp_millis(), now),
            "Dec 24, 2025"
        );
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(format_submitted(i64::MAX, Utc::now()), "unknown");
    }
}
