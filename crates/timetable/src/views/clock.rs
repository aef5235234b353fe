//! Clock helpers shared by the view derivations.
//!
//! All comparisons use the viewer's local clock; the published documents
//! carry no timezone information, so none is applied here.

use chrono::{Datelike, Local, NaiveTime, Timelike, Weekday};
use regex::Regex;
use std::sync::LazyLock;

// Strict "HH:MM" with an optional leading zero on the hour. The generator
// emits zero-padded 24-hour times, but hand-edited snapshots have shown up
// with "9:00".
static HHMM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").unwrap());

/// Formats a time of day for display: 12-hour, zero-padded, AM/PM suffix.
pub fn clock_string(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// [`clock_string`] for the current local time.
pub fn now_clock_string() -> String {
    clock_string(Local::now().time())
}

/// Full English name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// [`weekday_name`] for the current local day.
pub fn today_name() -> &'static str {
    weekday_name(Local::now().weekday())
}

/// Parses an `"HH:MM"` string into minutes since midnight.
///
/// Returns `None` for anything that is not a plausible 24-hour time of day;
/// callers treat such entries as never active rather than failing the view.
pub fn minutes_since_midnight(hhmm: &str) -> Option<u32> {
    let captures = HHMM_REGEX.captures(hhmm.trim())?;
    let hours: u32 = captures[1].parse().ok()?;
    let minutes: u32 = captures[2].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Minutes since midnight for the current local time.
pub fn now_minutes() -> u32 {
    let now = Local::now().time();
    now.hour() * 60 + now.minute()
}

/// Returns true iff `now` lies within `[start, end]`, both endpoints
/// inclusive — an entry is still live at its exact end minute.
pub fn is_active(start: &str, end: &str, now: u32) -> bool {
    match (minutes_since_midnight(start), minutes_since_midnight(end)) {
        (Some(start_min), Some(end_min)) => now >= start_min && now <= end_min,
        _ => false,
    }
}

/// [`is_active`] against the current local clock.
pub fn is_active_now(start: &str, end: &str) -> bool {
    is_active(start, end, now_minutes())
}
