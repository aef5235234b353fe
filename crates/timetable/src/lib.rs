//! Client library for statically published group timetable data.
//!
//! An offline generator copies a master spreadsheet into a handful of JSON
//! documents (one per group, one aggregate, a course catalog, and a metadata
//! blob) and republishes them on a fixed cadence. This crate fetches those
//! documents and derives the views a schedule front-end needs: today's
//! classes, the next upcoming class, a Monday-Friday weekly grid, and
//! cross-group free-text search.
//!
//! The documents are read-only from this side. There is no write path and no
//! coordination with the generator; every fetch sees either the old complete
//! snapshot or the new one.

pub mod debounce;
pub mod feed;
pub mod prefs;
pub mod render;
pub mod state;
pub mod views;

pub use feed::{ClientConfig, TimetableClient, TimetableError};
