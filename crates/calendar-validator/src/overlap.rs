//! Detect overlapping events within one calendar document.
//!
//! Events are grouped by their `date` string as written, so `2024-1-5` and
//! `2024-01-05` land in different groups even though they name the same day.
//! Within a group every pair is compared on half-open `[start, end)`
//! intervals in seconds since midnight. Adjacent events (one ends exactly
//! when the other starts) are NOT overlaps.

use std::fmt;

use crate::event::EventRecord;

/// Two events on the same date whose time ranges intersect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap<'a> {
    pub first_title: &'a str,
    pub first_index: usize,
    pub second_title: &'a str,
    pub second_index: usize,
    pub date: &'a str,
    pub overlap_seconds: u32,
}

impl fmt::Display for Overlap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" (index {}) overlaps with \"{}\" (index {}) on {}",
            self.first_title, self.first_index, self.second_title, self.second_index, self.date
        )
    }
}

/// Find every overlapping pair of events that share a `date` string.
///
/// Groups are visited in order of each date's first appearance, and pairs
/// within a group in document order, so the output is deterministic.
pub fn find_overlaps<'a>(events: &[EventRecord<'a>]) -> Vec<Overlap<'a>> {
    let mut groups: Vec<(&str, Vec<&EventRecord<'a>>)> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|(date, _)| *date == event.date) {
            Some((_, members)) => members.push(event),
            None => groups.push((event.date, vec![event])),
        }
    }

    let mut overlaps = Vec::new();
    for (_, members) in &groups {
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                let (a_start, a_end) = (a.start_seconds(), a.end_seconds());
                let (b_start, b_end) = (b.start_seconds(), b.end_seconds());
                // Excludes the adjacent case where a_end == b_start.
                if a_start < b_end && b_start < a_end {
                    overlaps.push(Overlap {
                        first_title: a.title,
                        first_index: a.index,
                        second_title: b.title,
                        second_index: b.index,
                        date: a.date,
                        overlap_seconds: a_end.min(b_end) - a_start.max(b_start),
                    });
                }
            }
        }
    }

    overlaps
}
