//! Tests for same-date overlap detection.

use calendar_validator::report::Diagnostics;
use calendar_validator::{find_overlaps, validate_event, EventRecord};
use serde_json::{json, Value};

/// Helper: build event JSON values; records borrow from these.
fn events(specs: &[(&str, &str, &str, &str)]) -> Vec<Value> {
    specs
        .iter()
        .map(|(title, date, start, end)| {
            json!({
                "title": title,
                "date": date,
                "startTime": start,
                "endTime": end,
                "startDateTime": format!("{date}T{start}"),
                "endDateTime": format!("{date}T{end}"),
            })
        })
        .collect()
}

fn records(values: &[Value]) -> Vec<EventRecord<'_>> {
    let mut diagnostics = Diagnostics::new();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| validate_event(v, i, true, &mut diagnostics).expect("fixture is valid"))
        .collect()
}

#[test]
fn partial_overlap_detected_once() {
    let values = events(&[
        ("A", "2024-1-15", "09:00:00", "10:00:00"),
        ("B", "2024-1-15", "09:30:00", "10:30:00"),
    ]);

    let overlaps = find_overlaps(&records(&values));

    assert_eq!(overlaps.len(), 1, "should detect exactly one overlap");
    assert_eq!(overlaps[0].overlap_seconds, 30 * 60);
    assert_eq!(
        overlaps[0].to_string(),
        "\"A\" (index 0) overlaps with \"B\" (index 1) on 2024-1-15"
    );
}

#[test]
fn adjacent_events_do_not_overlap() {
    let values = events(&[
        ("A", "2024-1-15", "09:00:00", "10:00:00"),
        ("B", "2024-1-15", "10:00:00", "11:00:00"),
    ]);

    assert!(
        find_overlaps(&records(&values)).is_empty(),
        "adjacent events (end == start) should not overlap"
    );
}

#[test]
fn fully_contained_event_overlaps() {
    let values = events(&[
        ("Workshop", "2024-1-15", "09:00:00", "12:00:00"),
        ("Coffee", "2024-1-15", "10:00:00", "10:15:00"),
    ]);

    let overlaps = find_overlaps(&records(&values));
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].overlap_seconds, 15 * 60);
}

#[test]
fn different_dates_never_compared() {
    let values = events(&[
        ("A", "2024-1-15", "09:00:00", "10:00:00"),
        ("B", "2024-1-16", "09:00:00", "10:00:00"),
    ]);

    assert!(find_overlaps(&records(&values)).is_empty());
}

#[test]
fn grouping_uses_literal_date_string() {
    // Same calendar day spelled two ways: grouped separately, so no overlap.
    let values = events(&[
        ("A", "2024-1-5", "09:00:00", "10:00:00"),
        ("B", "2024-01-05", "09:00:00", "10:00:00"),
    ]);

    assert!(find_overlaps(&records(&values)).is_empty());
}

#[test]
fn every_overlapping_pair_reported() {
    let values = events(&[
        ("A", "2024-1-15", "09:00:00", "12:00:00"),
        ("B", "2024-1-15", "10:00:00", "11:00:00"),
        ("C", "2024-1-15", "10:30:00", "13:00:00"),
    ]);

    let pairs: Vec<(usize, usize)> = find_overlaps(&records(&values))
        .iter()
        .map(|o| (o.first_index, o.second_index))
        .collect();

    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn groups_reported_in_order_of_first_appearance() {
    let values = events(&[
        ("X1", "2024-1-20", "09:00:00", "10:00:00"),
        ("Y1", "2024-1-10", "09:00:00", "10:00:00"),
        ("X2", "2024-1-20", "09:30:00", "10:30:00"),
        ("Y2", "2024-1-10", "09:30:00", "10:30:00"),
    ]);

    let dates: Vec<&str> = find_overlaps(&records(&values))
        .iter()
        .map(|o| o.date)
        .collect();

    assert_eq!(dates, vec!["2024-1-20", "2024-1-10"]);
}

#[test]
fn empty_input_no_overlaps() {
    assert!(find_overlaps(&[]).is_empty());
}
