//! Weekly grid derivation.

use crate::feed::{GroupTimetable, ScheduleEntry};

/// The five day buckets of the weekly view, in display order. Weekend
/// entries, should a snapshot ever contain them, are not shown here.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// One day's column of the weekly view.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule<'a> {
    pub day: &'static str,
    /// That day's entries, ascending by start time.
    pub entries: Vec<&'a ScheduleEntry>,
}

impl DaySchedule<'_> {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// The full Monday-Friday view for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekView<'a> {
    /// Always exactly five buckets, Monday first.
    pub days: Vec<DaySchedule<'a>>,
}

/// Buckets a group's entries into the five weekdays and time-sorts each
/// bucket.
///
/// Day matching is case-insensitive, same policy as the daily view. The
/// per-bucket sort compares the raw `"HH:MM"` strings, which orders
/// correctly because they are zero-padded 24-hour values; the sort is
/// stable, so entries sharing a start time keep generator order.
pub fn weekly_view(timetable: &GroupTimetable) -> WeekView<'_> {
    let days = WEEKDAYS
        .iter()
        .map(|&day| {
            let mut entries: Vec<&ScheduleEntry> = timetable
                .entries
                .iter()
                .filter(|entry| entry.day.eq_ignore_ascii_case(day))
                .collect();
            entries.sort_by(|a, b| a.time_slot.start_time.cmp(&b.time_slot.start_time));
            DaySchedule { day, entries }
        })
        .collect();

    WeekView { days }
}
