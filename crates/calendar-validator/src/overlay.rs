//! Translate validated calendar documents into desktop overlay records.
//!
//! The overlay reads events with Unix-epoch start/end seconds, an RGB colour,
//! a 1-10 priority and an all-day flag. Calendar documents store local
//! wall-clock strings instead, so translation needs the IANA timezone those
//! strings were written in.

use chrono::TimeZone;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OverlayError, Result};
use crate::grammar::parse_datetime;

pub const DEFAULT_COLOR: (u8, u8, u8) = (66, 133, 244);
pub const DEFAULT_PRIORITY: u8 = 5;

/// One event in the overlay's own JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayEvent {
    pub title: String,
    pub description: String,
    /// Unix timestamp (seconds).
    pub start_time: i64,
    /// Unix timestamp (seconds).
    pub end_time: i64,
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub priority: u8,
    pub all_day: bool,
}

/// Convert every event of a document that passed validation.
///
/// `startDateTime`/`endDateTime` are read as local times in `timezone`.
/// When a local time is ambiguous (DST fall-back) the earlier instant is
/// used; a local time inside a DST gap is an error.
///
/// Optional `description` (string), `priority` (integer 1-10) and `allDay`
/// (bool) fields are carried over; anything else falls back to defaults.
///
/// # Errors
/// Returns `OverlayError::InvalidTimezone` for an unknown IANA name and
/// `OverlayError::Malformed` when the document lacks the validated shape.
pub fn to_overlay_events(document: &Value, timezone: &str) -> Result<Vec<OverlayEvent>> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| OverlayError::InvalidTimezone(timezone.to_string()))?;

    let events = document["events"]
        .as_array()
        .ok_or_else(|| OverlayError::Malformed {
            index: 0,
            message: "document has no events array".to_string(),
        })?;

    events
        .iter()
        .enumerate()
        .map(|(index, event)| convert_event(event, index, tz))
        .collect()
}

fn convert_event(event: &Value, index: usize, tz: Tz) -> Result<OverlayEvent> {
    let title = required_str(event, "title", index)?;
    let start_time = timestamp(required_str(event, "startDateTime", index)?, index, tz)?;
    let end_time = timestamp(required_str(event, "endDateTime", index)?, index, tz)?;

    let priority = event["priority"]
        .as_u64()
        .filter(|p| (1..=10).contains(p))
        .map_or(DEFAULT_PRIORITY, |p| p as u8);
    let (color_r, color_g, color_b) = DEFAULT_COLOR;

    Ok(OverlayEvent {
        title: title.to_string(),
        description: event["description"].as_str().unwrap_or_default().to_string(),
        start_time,
        end_time,
        color_r,
        color_g,
        color_b,
        priority,
        all_day: event["allDay"].as_bool().unwrap_or(false),
    })
}

fn required_str<'a>(event: &'a Value, field: &str, index: usize) -> Result<&'a str> {
    event[field].as_str().ok_or_else(|| OverlayError::Malformed {
        index,
        message: format!("field \"{field}\" must be a string"),
    })
}

fn timestamp(datetime: &str, index: usize, tz: Tz) -> Result<i64> {
    let naive = parse_datetime(datetime).ok_or_else(|| OverlayError::Malformed {
        index,
        message: format!("invalid datetime \"{datetime}\""),
    })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| OverlayError::NonexistentLocalTime {
            index,
            datetime: datetime.to_string(),
            timezone: tz.name().to_string(),
        })
}
