//! Per-event validation.
//!
//! An event is checked in stages. Field presence and field types each
//! short-circuit the record; after that every format, time-order and
//! consistency problem is reported independently. All messages carry the
//! event's 0-based position in the `events` array.

use chrono::NaiveTime;
use serde_json::{Map, Value};

use crate::grammar::{self, parse_time};
use crate::report::Diagnostics;

/// Required event fields, in reporting order.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "title",
    "date",
    "startTime",
    "endTime",
    "startDateTime",
    "endDateTime",
];

/// An event that passed every per-event check, borrowing from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord<'a> {
    /// Position in the document's `events` array.
    pub index: usize,
    pub title: &'a str,
    /// The date exactly as written; overlap grouping uses this string.
    pub date: &'a str,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_date_time: &'a str,
    pub end_date_time: &'a str,
}

impl EventRecord<'_> {
    pub fn start_seconds(&self) -> u32 {
        grammar::seconds_of_day(self.start_time)
    }

    pub fn end_seconds(&self) -> u32 {
        grammar::seconds_of_day(self.end_time)
    }
}

/// Validate one element of the `events` array.
///
/// Returns the typed record when no error was recorded for it. With
/// `strict` set, `startDateTime`/`endDateTime` must also equal
/// `date + "T" + startTime`/`endTime` character for character.
pub fn validate_event<'a>(
    value: &'a Value,
    index: usize,
    strict: bool,
    diagnostics: &mut Diagnostics,
) -> Option<EventRecord<'a>> {
    let Some(event) = value.as_object() else {
        diagnostics.error(format!("Event {index}: must be a JSON object"));
        return None;
    };

    let fields = required_strings(event, index, diagnostics)?;
    let [title, date, start, end, start_dt, end_dt] = fields;

    let errors_before = diagnostics.errors.len();

    if !grammar::is_valid_date(date) {
        diagnostics.error(format!(
            "Event {index}: Invalid date format \"{date}\". Expected YYYY-MM-DD"
        ));
    }
    let start_time = parse_time(start);
    if start_time.is_none() {
        diagnostics.error(format!(
            "Event {index}: Invalid startTime format \"{start}\". Expected HH:MM:SS"
        ));
    }
    let end_time = parse_time(end);
    if end_time.is_none() {
        diagnostics.error(format!(
            "Event {index}: Invalid endTime format \"{end}\". Expected HH:MM:SS"
        ));
    }
    if !grammar::is_valid_datetime(start_dt) {
        diagnostics.error(format!(
            "Event {index}: Invalid startDateTime format \"{start_dt}\". Expected YYYY-MM-DDTHH:MM:SS"
        ));
    }
    if !grammar::is_valid_datetime(end_dt) {
        diagnostics.error(format!(
            "Event {index}: Invalid endDateTime format \"{end_dt}\". Expected YYYY-MM-DDTHH:MM:SS"
        ));
    }

    // Same-day events only: equal or earlier end times are rejected.
    if let (Some(s), Some(e)) = (start_time, end_time) {
        if grammar::seconds_of_day(e) <= grammar::seconds_of_day(s) {
            diagnostics.error(format!(
                "Event {index}: endTime must be after startTime ({start} -> {end})"
            ));
        }
    }

    if strict {
        check_consistency(index, "startDateTime", date, start, start_dt, diagnostics);
        check_consistency(index, "endDateTime", date, end, end_dt, diagnostics);
    }

    if diagnostics.errors.len() != errors_before {
        return None;
    }

    Some(EventRecord {
        index,
        title,
        date,
        start_time: start_time?,
        end_time: end_time?,
        start_date_time: start_dt,
        end_date_time: end_dt,
    })
}

/// Presence first, then type. Each stage reports all offending fields.
fn required_strings<'a>(
    event: &'a Map<String, Value>,
    index: usize,
    diagnostics: &mut Diagnostics,
) -> Option<[&'a str; 6]> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !event.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        for field in missing {
            diagnostics.error(format!(
                "Event {index}: Missing required field \"{field}\""
            ));
        }
        return None;
    }

    let mut values = [""; 6];
    let mut typed = true;
    for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        match event.get(field).and_then(Value::as_str) {
            Some(text) => *slot = text,
            None => {
                diagnostics.error(format!(
                    "Event {index}: Field \"{field}\" must be a string"
                ));
                typed = false;
            }
        }
    }

    typed.then_some(values)
}

fn check_consistency(
    index: usize,
    field: &str,
    date: &str,
    time: &str,
    actual: &str,
    diagnostics: &mut Diagnostics,
) {
    let expected = format!("{date}T{time}");
    if actual != expected {
        diagnostics.error(format!(
            "Event {index}: {field} inconsistency. Expected \"{expected}\", got \"{actual}\""
        ));
    }
}
