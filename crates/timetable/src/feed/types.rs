/// Wire types for the published timetable documents
use serde::{Deserialize, Serialize};

/// A single time window within a day.
///
/// `start_time` and `end_time` are zero-padded 24-hour `"HH:MM"` strings;
/// the generator guarantees `start_time < end_time` and that
/// `duration_minutes` equals their difference. Nothing on this side
/// recomputes or enforces either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
}

/// Course fields embedded in every schedule entry.
///
/// This is a denormalized copy of the catalog data, stamped per entry by the
/// generator. The catalog in `courses.json` is the canonical record; the two
/// are kept consistent upstream, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    pub course_code: String,
    pub course_name: String,
    pub instructor: String,
    pub credits: i64,
}

/// One scheduled class occurrence: course + day + time window + room + type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Generator-assigned UUID.
    #[serde(default)]
    pub id: String,

    /// Owning group identifier (also stamped on each entry, not just the
    /// enclosing document).
    #[serde(default)]
    pub group: String,

    /// Full weekday name. Casing is whatever the spreadsheet had, so all
    /// comparisons against it are case-insensitive.
    pub day: String,

    pub time_slot: TimeSlot,
    pub course: CourseRef,
    pub room: String,

    /// "Lecture", "Lab", etc.
    pub entry_type: String,
}

/// Contents of `group_{id}.json`: one group's full week, in generator order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTimetable {
    pub group: String,
    pub entries: Vec<ScheduleEntry>,
    #[serde(default)]
    pub total_classes: usize,
}

impl GroupTimetable {
    /// An empty timetable for the given group, used as the substitute value
    /// when a fetch fails.
    pub fn empty(group: &str) -> Self {
        Self {
            group: group.to_string(),
            entries: Vec::new(),
            total_classes: 0,
        }
    }
}

/// Envelope of `timetable.json`: every group's timetable in one document.
/// Only the search view reads this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Vec<GroupTimetable>,
    #[serde(default)]
    pub total_groups: usize,
    #[serde(default)]
    pub last_updated: String,
}

impl TimetableResponse {
    pub fn empty() -> Self {
        Self {
            success: false,
            data: Vec::new(),
            total_groups: 0,
            last_updated: String::new(),
        }
    }
}

/// One pre-joined slot in a catalog course's schedule listing.
///
/// Coarser than [`ScheduleEntry`]: `time` is a display string
/// (`"HH:MM - HH:MM"`) rather than a structured slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSlot {
    pub group: String,
    pub day: String,
    pub time: String,
    pub room: String,
    #[serde(rename = "type")]
    pub slot_type: String,
}

/// Canonical catalog record for one course, keyed by `course_code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub instructor: String,
    pub credits: i64,
    pub groups: Vec<String>,
    pub schedule: Vec<CourseSlot>,
}

/// Contents of `courses.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

impl CoursesResponse {
    pub fn empty() -> Self {
        Self {
            courses: Vec::new(),
        }
    }
}

/// Contents of `metadata.json`. Descriptive only; no derivation reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub total_groups: usize,
    #[serde(default)]
    pub total_entries: usize,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Metadata {
    pub fn empty() -> Self {
        Self {
            last_updated: String::new(),
            total_groups: 0,
            total_entries: 0,
            groups: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_group_document() {
        let json = r#"{
            "group": "A",
            "entries": [
                {
                    "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                    "group": "A",
                    "day": "Monday",
                    "time_slot": {
                        "start_time": "09:00",
                        "end_time": "10:30",
                        "duration_minutes": 90
                    },
                    "course": {
                        "course_code": "DSA",
                        "course_name": "Data Structures and Algorithms",
                        "instructor": "Dr. Rahman",
                        "credits": 3
                    },
                    "room": "Room 204",
                    "entry_type": "Lecture"
                }
            ],
            "total_classes": 1
        }"#;

        let parsed: GroupTimetable = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.group, "A");
        assert_eq!(parsed.total_classes, 1);
        assert_eq!(parsed.entries[0].time_slot.duration_minutes, 90);
        assert_eq!(parsed.entries[0].course.course_code, "DSA");
    }

    #[test]
    fn parses_aggregate_envelope() {
        let json = r#"{
            "success": true,
            "data": [
                { "group": "A", "entries": [], "total_classes": 0 },
                { "group": "B", "entries": [], "total_classes": 0 }
            ],
            "total_groups": 2,
            "last_updated": "2025-11-03T06:00:12.331109"
        }"#;

        let parsed: TimetableResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.total_groups, 2);
    }

    #[test]
    fn parses_catalog_slot_type_field() {
        let json = r#"{
            "courses": [
                {
                    "course_code": "DSA",
                    "course_name": "Data Structures and Algorithms",
                    "instructor": "Dr. Rahman",
                    "credits": 3,
                    "groups": ["A", "B"],
                    "schedule": [
                        {
                            "group": "A",
                            "day": "Monday",
                            "time": "09:00 - 10:30",
                            "room": "Room 204",
                            "type": "Lecture"
                        }
                    ]
                }
            ]
        }"#;

        let parsed: CoursesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.courses[0].schedule[0].slot_type, "Lecture");
    }

    #[test]
    fn entry_without_generator_id_still_parses() {
        // Older snapshots predate the id/group stamps on entries.
        let json = r#"{
            "day": "Friday",
            "time_slot": { "start_time": "14:00", "end_time": "15:00", "duration_minutes": 60 },
            "course": {
                "course_code": "OS",
                "course_name": "Operating Systems",
                "instructor": "Dr. Karim",
                "credits": 3
            },
            "room": "Lab 2",
            "entry_type": "Lab"
        }"#;

        let parsed: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert!(parsed.id.is_empty());
        assert_eq!(parsed.day, "Friday");
    }
}
