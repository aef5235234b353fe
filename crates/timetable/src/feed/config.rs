/// Configuration for the feed client
use std::time::Duration;

/// Default base URL for the published documents. The generator drops them
/// under the site's `data/` directory.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/data";

/// Environment variable consulted when no base URL is given explicitly.
pub const BASE_URL_ENV: &str = "TIMETABLE_BASE_URL";

/// Configuration for [`TimetableClient`](super::TimetableClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the document names are joined onto
    pub base_url: String,
    /// Connect timeout for each request
    pub connect_timeout: Duration,
    /// Total per-request timeout
    pub request_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("timetable/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Resolves the base URL from an explicit override, the
    /// `TIMETABLE_BASE_URL` environment variable, or the built-in default,
    /// in that order.
    pub fn resolve_base_url(explicit: Option<String>) -> String {
        explicit
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
