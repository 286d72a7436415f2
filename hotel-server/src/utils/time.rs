//! Time Utilities
//!
//! Date parsing and hotel-timezone arithmetic. Statistics windows
//! ("today", peak hours, monthly buckets) are computed in the
//! configured hotel timezone rather than UTC.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use shared::types::Timestamp;

/// Convert a local date and time-of-day to epoch milliseconds
///
/// Ambiguous local times (DST fold) resolve to the later instant;
/// nonexistent local times (DST gap) fall back to the UTC reading.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> Timestamp {
    let naive = date
        .and_hms_opt(hour, min, sec)
        .unwrap_or_else(|| date.and_hms_opt(0, 0, 0).unwrap_or_default());

    match tz.from_local_datetime(&naive).latest() {
        Some(local) => local.timestamp_millis(),
        None => Utc.from_utc_datetime(&naive).timestamp_millis(),
    }
}

/// Current date in the given timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Hour of day (0-23) for an epoch-millisecond instant in the given timezone
pub fn hour_in_tz(millis: Timestamp, tz: Tz) -> u32 {
    millis_to_tz(millis, tz).hour()
}

/// Month number (1-12) for a date
pub fn month_of(date: NaiveDate) -> u32 {
    date.month()
}

/// Abbreviated month name ("Jan".."Dec") for a 1-based month number
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

fn millis_to_tz(millis: Timestamp, tz: Tz) -> DateTime<Tz> {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(utc) => utc.with_timezone(&tz),
        _ => Utc::now().with_timezone(&tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_hms_to_millis_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 15, 14, 30, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        assert_eq!(date_hms_to_millis(date, 14, 30, 0, chrono_tz::UTC), expected);
    }

    #[test]
    fn test_date_hms_respects_timezone() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let utc = date_hms_to_millis(date, 0, 0, 0, chrono_tz::UTC);
        let shanghai = date_hms_to_millis(date, 0, 0, 0, chrono_tz::Asia::Shanghai);
        // Shanghai midnight is 8 hours before UTC midnight
        assert_eq!(utc - shanghai, 8 * 60 * 60 * 1000);
    }

    #[test]
    fn test_hour_in_tz() {
        // 2024-01-15 13:30:00 UTC
        let millis = Utc
            .with_ymd_and_hms(2024, 1, 15, 13, 30, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        assert_eq!(hour_in_tz(millis, chrono_tz::UTC), 13);
        assert_eq!(hour_in_tz(millis, chrono_tz::Asia::Shanghai), 21);
    }

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_abbrev(12), "Dec");
    }
}
