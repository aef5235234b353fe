//! Cross-group free-text search over the aggregate document.

use crate::feed::{ScheduleEntry, TimetableResponse};

/// One search match, tagged with the group it came from.
///
/// Owns its entry so results can outlive the fetched document in a view
/// state container.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub group: String,
    pub entry: ScheduleEntry,
}

/// Result of a search invocation.
///
/// `NoQuery` is deliberately distinct from `Results(vec![])`: a blank query
/// box and a query with zero matches render differently.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query was empty or whitespace-only; nothing was searched.
    NoQuery,
    /// The query ran; the vector may be empty.
    Results(Vec<SearchHit>),
}

impl SearchOutcome {
    pub fn is_no_query(&self) -> bool {
        matches!(self, SearchOutcome::NoQuery)
    }
}

/// Runs a substring search across every group in the aggregate.
///
/// The lowercased query is matched against four fields of each entry:
/// course name, instructor, room, and course code. When `group_filter` is
/// set, only the group whose identifier matches it case-insensitively is
/// searched. Results keep dataset order then entry order; there is no
/// relevance ranking.
pub fn search(
    aggregate: &TimetableResponse,
    query: &str,
    group_filter: Option<&str>,
) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::NoQuery;
    }

    let mut hits = Vec::new();
    for group in &aggregate.data {
        if let Some(filter) = group_filter {
            if !group.group.eq_ignore_ascii_case(filter) {
                continue;
            }
        }

        for entry in &group.entries {
            if entry_matches(entry, &needle) {
                hits.push(SearchHit {
                    group: group.group.clone(),
                    entry: entry.clone(),
                });
            }
        }
    }

    SearchOutcome::Results(hits)
}

fn entry_matches(entry: &ScheduleEntry, needle: &str) -> bool {
    entry.course.course_name.to_lowercase().contains(needle)
        || entry.course.instructor.to_lowercase().contains(needle)
        || entry.room.to_lowercase().contains(needle)
        || entry.course.course_code.to_lowercase().contains(needle)
}
