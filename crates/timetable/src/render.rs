//! Plain-text rendering of the derived views.
//!
//! Formatting only; every decision about what appears in a list is made by
//! the derivations in [`crate::views`].

use crate::feed::{Course, CoursesResponse, Metadata, ScheduleEntry};
use crate::views::clock::is_active;
use crate::views::{SearchHit, SearchOutcome, WeekView};
use std::fmt::Write;

fn entry_line(entry: &ScheduleEntry) -> String {
    format!(
        "{} - {}  {} ({})  {}  {}",
        entry.time_slot.start_time,
        entry.time_slot.end_time,
        entry.course.course_name,
        entry.course.course_code,
        entry.room,
        entry.entry_type,
    )
}

/// Renders the daily view: every class today, the live one marked, and the
/// next one called out.
pub fn today_view(
    group: &str,
    weekday: &str,
    today: &[&ScheduleEntry],
    next: Option<&ScheduleEntry>,
    now_minutes: u32,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} — Group {}", weekday, group);

    if today.is_empty() {
        out.push_str("No classes today.\n");
        return out;
    }

    for entry in today {
        let live = is_active(
            &entry.time_slot.start_time,
            &entry.time_slot.end_time,
            now_minutes,
        );
        let marker = if live { "▶" } else { " " };
        let _ = writeln!(out, " {} {}", marker, entry_line(entry));
    }

    match next {
        Some(entry) => {
            let _ = writeln!(
                out,
                "Next: {} at {}",
                entry.course.course_name, entry.time_slot.start_time
            );
        }
        None => out.push_str("No more classes today.\n"),
    }

    out
}

/// Renders the Monday-Friday grid with per-day counts.
pub fn week_view(group: &str, week: &WeekView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Week — Group {}", group);

    for day in &week.days {
        let _ = writeln!(out, "{} ({})", day.day, day.count());
        for entry in &day.entries {
            let _ = writeln!(out, "   {}", entry_line(entry));
        }
    }

    out
}

/// Renders a search outcome. The no-query state gets its own wording,
/// distinct from a query that matched nothing.
pub fn search_view(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::NoQuery => "Type a query to search.\n".to_string(),
        SearchOutcome::Results(hits) if hits.is_empty() => "No matches.\n".to_string(),
        SearchOutcome::Results(hits) => {
            let mut out = String::new();
            for hit in hits {
                let _ = writeln!(out, "[{}] {} {}", hit.group, hit.entry.day, entry_line(&hit.entry));
            }
            out
        }
    }
}

/// Renders already-stored hits (the search view's persisted result list).
pub fn search_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matches.\n".to_string();
    }
    let mut out = String::new();
    for hit in hits {
        let _ = writeln!(out, "[{}] {} {}", hit.group, hit.entry.day, entry_line(&hit.entry));
    }
    out
}

fn course_card(course: &Course) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} — {} ({} cr)  {}",
        course.course_code,
        course.course_name,
        course.credits,
        course.instructor
    );
    let _ = writeln!(out, "   Groups: {}", course.groups.join(", "));
    for slot in &course.schedule {
        let _ = writeln!(
            out,
            "   [{}] {} {}  {}  {}",
            slot.group, slot.day, slot.time, slot.room, slot.slot_type
        );
    }
    out
}

/// Renders the catalog as one card per course, straight off the document.
pub fn courses_view(catalog: &CoursesResponse) -> String {
    if catalog.courses.is_empty() {
        return "No courses.\n".to_string();
    }
    catalog.courses.iter().map(course_card).collect()
}

/// Renders the snapshot metadata.
pub fn status_view(metadata: &Metadata, clock: &str, dark_mode: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Local time:    {}", clock);
    let _ = writeln!(out, "Last updated:  {}", metadata.last_updated);
    let _ = writeln!(out, "Groups:        {}", metadata.groups.join(", "));
    let _ = writeln!(out, "Total entries: {}", metadata.total_entries);
    let _ = writeln!(out, "Dark mode:     {}", if dark_mode { "on" } else { "off" });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{CourseRef, GroupTimetable, TimeSlot};
    use crate::views::{todays_classes, weekly_view};

    fn entry(day: &str, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: String::new(),
            group: "A".to_string(),
            day: day.to_string(),
            time_slot: TimeSlot {
                start_time: start.to_string(),
                end_time: end.to_string(),
                duration_minutes: 0,
            },
            course: CourseRef {
                course_code: "DSA".to_string(),
                course_name: "Data Structures".to_string(),
                instructor: "Dr. Rahman".to_string(),
                credits: 3,
            },
            room: "Room 204".to_string(),
            entry_type: "Lecture".to_string(),
        }
    }

    #[test]
    fn empty_day_renders_no_classes() {
        let rendered = today_view("A", "Monday", &[], None, 540);
        assert!(rendered.contains("No classes today."));
    }

    #[test]
    fn live_class_gets_a_marker() {
        let timetable = GroupTimetable {
            group: "A".to_string(),
            entries: vec![entry("Monday", "09:00", "10:30")],
            total_classes: 1,
        };
        let today = todays_classes(&timetable, "Monday");

        let live = today_view("A", "Monday", &today, None, 570);
        let idle = today_view("A", "Monday", &today, None, 480);

        assert!(live.contains('▶'));
        assert!(!idle.contains('▶'));
    }

    #[test]
    fn week_renders_all_five_days_with_counts() {
        let timetable = GroupTimetable {
            group: "A".to_string(),
            entries: vec![entry("Monday", "09:00", "10:30")],
            total_classes: 1,
        };
        let week = weekly_view(&timetable);
        let rendered = week_view("A", &week);

        assert!(rendered.contains("Monday (1)"));
        assert!(rendered.contains("Friday (0)"));
    }

    #[test]
    fn no_query_and_no_matches_render_differently() {
        let no_query = search_view(&SearchOutcome::NoQuery);
        let no_matches = search_view(&SearchOutcome::Results(Vec::new()));
        assert_ne!(no_query, no_matches);
    }
}
