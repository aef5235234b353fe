/// Timetable feed module: wire types and the document fetch client
mod client;
mod config;
mod error;
mod types;

pub use client::TimetableClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::TimetableError;
pub use types::*;
