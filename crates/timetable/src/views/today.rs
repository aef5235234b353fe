//! Today's-classes and next-class derivations.

use super::clock::minutes_since_midnight;
use crate::feed::{GroupTimetable, ScheduleEntry};

/// Selects the entries scheduled on `weekday`, preserving generator order.
///
/// Day matching is case-insensitive; stored day names come straight from the
/// spreadsheet and their casing is not guaranteed. An empty result is a
/// normal state ("no classes today"), not an error.
pub fn todays_classes<'a>(
    timetable: &'a GroupTimetable,
    weekday: &str,
) -> Vec<&'a ScheduleEntry> {
    timetable
        .entries
        .iter()
        .filter(|entry| entry.day.eq_ignore_ascii_case(weekday))
        .collect()
}

/// Finds the next class after `now_minutes` among today's entries.
///
/// Returns the entry with the smallest start time strictly greater than
/// `now_minutes`, regardless of input order — the generator usually writes
/// each day time-sorted, but nothing guarantees it, so this scans for the
/// chronological minimum instead of trusting the sequence. Entries whose
/// start time does not parse are skipped. `None` means no class remains
/// today.
pub fn next_class<'a>(
    today: &[&'a ScheduleEntry],
    now_minutes: u32,
) -> Option<&'a ScheduleEntry> {
    today
        .iter()
        .filter_map(|entry| {
            minutes_since_midnight(&entry.time_slot.start_time).map(|start| (start, *entry))
        })
        .filter(|(start, _)| *start > now_minutes)
        .min_by_key(|(start, _)| *start)
        .map(|(_, entry)| entry)
}
