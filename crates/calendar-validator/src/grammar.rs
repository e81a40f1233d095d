//! Date, time and datetime grammars used by calendar documents.
//!
//! - Date: `YYYY-M-D`, month and day may have one or two digits, and the
//!   components must name a real calendar day (`2024-2-30` is rejected).
//!   Years `0000`-`0099` are rejected.
//! - Time: `HH:MM:SS`, exactly two digits each, hour 0-23, minute and
//!   second 0-59.
//! - DateTime: a date and a time joined by `T` (`2024-1-15T09:00:00`).
//!
//! Only ASCII digits are accepted.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 100;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("Invalid date regex")
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("Invalid time regex")
});

static DATETIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})T([0-9]{2}):([0-9]{2}):([0-9]{2})$")
        .expect("Invalid datetime regex")
});

/// Parse a flexible `YYYY-M-D` date, rejecting days that do not exist.
///
/// ```
/// use calendar_validator::grammar::parse_date;
///
/// assert!(parse_date("2024-1-5").is_some());
/// assert!(parse_date("2024-02-29").is_some());
/// assert!(parse_date("2024-02-30").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let caps = DATE_PATTERN.captures(input)?;
    date_from_parts(&caps[1], &caps[2], &caps[3])
}

/// Parse a strict `HH:MM:SS` wall-clock time.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let caps = TIME_PATTERN.captures(input)?;
    time_from_parts(&caps[1], &caps[2], &caps[3])
}

/// Parse a `YYYY-M-DTHH:MM:SS` datetime.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let caps = DATETIME_PATTERN.captures(input)?;
    let date = date_from_parts(&caps[1], &caps[2], &caps[3])?;
    let time = time_from_parts(&caps[4], &caps[5], &caps[6])?;
    Some(date.and_time(time))
}

pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_some()
}

pub fn is_valid_time(input: &str) -> bool {
    parse_time(input).is_some()
}

pub fn is_valid_datetime(input: &str) -> bool {
    parse_datetime(input).is_some()
}

/// Elapsed seconds since midnight, the unit used for ordering and overlap.
pub fn seconds_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight()
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    if year < MIN_YEAR {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    // from_ymd_opt refuses out-of-range months and days past the month's end.
    NaiveDate::from_ymd_opt(year, month, day)
}

fn time_from_parts(hour: &str, minute: &str, second: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    let second: u32 = second.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, second)
}
