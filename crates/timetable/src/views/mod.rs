/// View derivations: pure filters/transforms from a fetched document plus
/// the wall clock to the list a front-end renders
pub mod clock;
mod search;
mod today;
mod week;

pub use search::{search, SearchHit, SearchOutcome};
pub use today::{next_class, todays_classes};
pub use week::{weekly_view, DaySchedule, WeekView, WEEKDAYS};
