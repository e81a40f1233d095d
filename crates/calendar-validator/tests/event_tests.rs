//! Tests for per-event validation.

use calendar_validator::report::Diagnostics;
use calendar_validator::validate_event;
use serde_json::{json, Value};

/// Helper: a well-formed event on 2024-1-15 between two `HH:MM:SS` times.
fn event(title: &str, start: &str, end: &str) -> Value {
    json!({
        "title": title,
        "date": "2024-1-15",
        "startTime": start,
        "endTime": end,
        "startDateTime": format!("2024-1-15T{start}"),
        "endDateTime": format!("2024-1-15T{end}"),
    })
}

fn check(event: &Value, strict: bool) -> Vec<String> {
    let mut diagnostics = Diagnostics::new();
    validate_event(event, 0, strict, &mut diagnostics);
    diagnostics.errors
}

#[test]
fn well_formed_event_passes() {
    let value = event("Team Meeting", "09:00:00", "10:00:00");
    let mut diagnostics = Diagnostics::new();
    let record = validate_event(&value, 0, true, &mut diagnostics).expect("event is valid");

    assert!(diagnostics.errors.is_empty());
    assert_eq!(record.title, "Team Meeting");
    assert_eq!(record.date, "2024-1-15");
}

#[test]
fn missing_fields_batch_and_skip_value_checks() {
    let value = json!({
        "date": "garbage",
        "startTime": "09:00:00",
        "endTime": "10:00:00",
        "startDateTime": "2024-1-15T09:00:00"
    });

    assert_eq!(
        check(&value, true),
        vec![
            "Event 0: Missing required field \"title\"",
            "Event 0: Missing required field \"endDateTime\"",
        ]
    );
}

#[test]
fn non_string_fields_reported() {
    let mut value = event("Lunch", "12:00:00", "13:00:00");
    value["startTime"] = json!(1200);
    value["endTime"] = json!(null);

    assert_eq!(
        check(&value, true),
        vec![
            "Event 0: Field \"startTime\" must be a string",
            "Event 0: Field \"endTime\" must be a string",
        ]
    );
}

#[test]
fn non_object_event_rejected() {
    assert_eq!(
        check(&json!("Team Meeting"), true),
        vec!["Event 0: must be a JSON object"]
    );
}

#[test]
fn format_errors_accumulate() {
    let value = json!({
        "title": "Broken",
        "date": "2024-02-30",
        "startTime": "9:00",
        "endTime": "25:00:00",
        "startDateTime": "2024-02-30T9:00",
        "endDateTime": "2024-02-30T25:00:00"
    });

    let errors = check(&value, false);
    assert_eq!(errors.len(), 5, "one error per malformed field: {errors:?}");
    assert!(errors[0].contains("Invalid date format \"2024-02-30\""));
    assert!(errors[1].contains("Invalid startTime format"));
    assert!(errors[2].contains("Invalid endTime format"));
    assert!(errors[3].contains("Invalid startDateTime format"));
    assert!(errors[4].contains("Invalid endDateTime format"));
}

#[test]
fn equal_start_and_end_rejected_in_both_modes() {
    let value = event("Zero length", "09:00:00", "09:00:00");
    let expected = "Event 0: endTime must be after startTime (09:00:00 -> 09:00:00)";

    assert_eq!(check(&value, true), vec![expected]);
    assert_eq!(check(&value, false), vec![expected]);
}

#[test]
fn end_before_start_rejected() {
    let value = event("Cross midnight", "23:00:00", "01:00:00");
    let errors = check(&value, false);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("endTime must be after startTime"));
}

#[test]
fn start_before_end_passes_time_order() {
    let value = event("One second", "09:00:00", "09:00:01");
    assert!(check(&value, false).is_empty());
}

#[test]
fn strict_mode_requires_literal_datetime_concatenation() {
    let mut value = event("Padded", "09:00:00", "10:00:00");
    // Same instant, different spelling: still a mismatch.
    value["startDateTime"] = json!("2024-01-15T09:00:00");

    assert_eq!(
        check(&value, true),
        vec![
            "Event 0: startDateTime inconsistency. Expected \"2024-1-15T09:00:00\", got \"2024-01-15T09:00:00\""
        ]
    );
}

#[test]
fn non_strict_mode_ignores_datetime_mismatch() {
    let mut value = event("Mismatched", "09:00:00", "10:00:00");
    value["startDateTime"] = json!("2024-1-16T11:00:00");
    value["endDateTime"] = json!("2024-1-16T12:00:00");

    assert!(check(&value, false).is_empty());
    assert_eq!(check(&value, true).len(), 2);
}

#[test]
fn errors_carry_event_index() {
    let value = event("Late", "10:00:00", "09:00:00");
    let mut diagnostics = Diagnostics::new();
    validate_event(&value, 7, false, &mut diagnostics);
    assert!(diagnostics.errors[0].starts_with("Event 7: "));
}
