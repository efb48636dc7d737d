//! Lenient date parsing for publication timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

/// Parse a date or date-time string into a naive timestamp.
///
/// Offsets are honored and converted to UTC. Bare dates resolve to
/// midnight. Returns `None` for anything unrecognized.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Whole days elapsed from `from` to `to`, floored.
///
/// Partial days round toward negative infinity, so a date twelve hours in
/// the future is `-1` days old.
pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let delta = to - from;
    let days = delta.num_days();
    match TimeDelta::try_days(days) {
        Some(whole) if delta < whole => days - 1,
        _ => days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("valid test timestamp")
    }

    #[test]
    fn parses_common_layouts() {
        assert_eq!(parse_datetime("2024-01-15"), Some(at(2024, 1, 15, 0)));
        assert_eq!(
            parse_datetime("2024-01-15 10:00:00"),
            Some(at(2024, 1, 15, 10))
        );
        assert_eq!(
            parse_datetime("2024-01-15T10:00:00"),
            Some(at(2024, 1, 15, 10))
        );
        assert_eq!(parse_datetime("01/15/2024"), Some(at(2024, 1, 15, 0)));
        assert_eq!(parse_datetime("2024/01/15"), Some(at(2024, 1, 15, 0)));
    }

    #[test]
    fn offsets_convert_to_utc() {
        assert_eq!(
            parse_datetime("2024-01-15T10:00:00-03:00"),
            Some(at(2024, 1, 15, 13))
        );
        assert_eq!(
            parse_datetime("2024-01-15T10:00:00Z"),
            Some(at(2024, 1, 15, 10))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_datetime("not a date"), None);
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("2024-13-45"), None);
    }

    #[test]
    fn day_counts_are_floored() {
        let now = at(2024, 2, 14, 12);
        assert_eq!(whole_days_between(at(2024, 1, 15, 0), now), 30);
        assert_eq!(whole_days_between(at(2024, 2, 14, 12), now), 0);
        assert_eq!(whole_days_between(at(2024, 2, 15, 0), now), -1);
        assert_eq!(whole_days_between(at(2024, 2, 16, 12), now), -2);
    }
}
