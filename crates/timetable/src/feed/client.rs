//! HTTP client for the published timetable documents.
//!
//! The generator republishes four static files on a fixed cadence:
//!
//! - `group_{id}.json` — one group's week ([`GroupTimetable`])
//! - `timetable.json` — all groups in one envelope ([`TimetableResponse`])
//! - `courses.json` — the course catalog ([`CoursesResponse`])
//! - `metadata.json` — snapshot description ([`Metadata`])
//!
//! Each `fetch_*` method has a `_or_empty` companion implementing the
//! display-boundary policy: transport failures, non-success statuses, and
//! malformed bodies are all logged and collapsed to an empty document, so a
//! rendering layer never sees an error — only "no data". Callers that need
//! to distinguish the failure modes use the `Result` forms directly.

use super::config::ClientConfig;
use super::error::TimetableError;
use super::types::{CoursesResponse, GroupTimetable, Metadata, TimetableResponse};
use rand::Rng;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

/// Document names as published by the generator.
const AGGREGATE_FILE: &str = "timetable.json";
const COURSES_FILE: &str = "courses.json";
const METADATA_FILE: &str = "metadata.json";

/// Client for fetching the static timetable documents.
pub struct TimetableClient {
    client: Client,
    base: Url,
}

impl TimetableClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, TimetableError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, TimetableError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TimetableError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(TimetableError::BaseUrl {
                message: format!("{} cannot serve as a base", config.base_url),
            });
        }

        Ok(Self { client, base })
    }

    /// Fetches one group's timetable from `group_{id}.json`.
    ///
    /// The group identifier is lowercased to form the file name, matching
    /// how the generator writes the per-group documents.
    pub async fn fetch_group(&self, group: &str) -> Result<GroupTimetable, TimetableError> {
        let file = format!("group_{}.json", group.to_lowercase());
        self.get_document(&file).await
    }

    /// Fetches the all-groups aggregate from `timetable.json`.
    pub async fn fetch_all(&self) -> Result<TimetableResponse, TimetableError> {
        self.get_document(AGGREGATE_FILE).await
    }

    /// Fetches the course catalog from `courses.json`.
    pub async fn fetch_courses(&self) -> Result<CoursesResponse, TimetableError> {
        self.get_document(COURSES_FILE).await
    }

    /// Fetches the snapshot metadata from `metadata.json`.
    pub async fn fetch_metadata(&self) -> Result<Metadata, TimetableError> {
        self.get_document(METADATA_FILE).await
    }

    /// [`fetch_group`](Self::fetch_group), collapsed at the display
    /// boundary: any failure yields an empty timetable for the group.
    pub async fn fetch_group_or_empty(&self, group: &str) -> GroupTimetable {
        match self.fetch_group(group).await {
            Ok(timetable) => timetable,
            Err(e) => {
                warn!(group = %group, error = %e, "Group fetch failed, substituting empty timetable");
                GroupTimetable::empty(group)
            }
        }
    }

    /// [`fetch_all`](Self::fetch_all), collapsed at the display boundary.
    pub async fn fetch_all_or_empty(&self) -> TimetableResponse {
        match self.fetch_all().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Aggregate fetch failed, substituting empty response");
                TimetableResponse::empty()
            }
        }
    }

    /// [`fetch_courses`](Self::fetch_courses), collapsed at the display
    /// boundary.
    pub async fn fetch_courses_or_empty(&self) -> CoursesResponse {
        match self.fetch_courses().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed, substituting empty catalog");
                CoursesResponse::empty()
            }
        }
    }

    /// [`fetch_metadata`](Self::fetch_metadata), collapsed at the display
    /// boundary.
    pub async fn fetch_metadata_or_empty(&self) -> Metadata {
        match self.fetch_metadata().await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(error = %e, "Metadata fetch failed, substituting empty metadata");
                Metadata::empty()
            }
        }
    }

    /// Fetches and decodes a single published document.
    async fn get_document<T: DeserializeOwned>(&self, file: &str) -> Result<T, TimetableError> {
        let correlation_id = generate_correlation_id();
        let url = self.document_url(file)?;

        debug!(
            correlation_id = %correlation_id,
            url = %url,
            "Fetching document"
        );

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(
                correlation_id = %correlation_id,
                url = %url,
                status = status.as_u16(),
                "Document fetch returned non-success status"
            );
            return Err(TimetableError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let document = serde_json::from_str(&body).map_err(|e| TimetableError::Malformed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        info!(
            correlation_id = %correlation_id,
            url = %url,
            bytes = body.len(),
            "Document fetched"
        );

        Ok(document)
    }

    /// Joins a document name onto the base URL.
    fn document_url(&self, file: &str) -> Result<Url, TimetableError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| TimetableError::BaseUrl {
                message: format!("{} cannot serve as a base", self.base),
            })?
            .pop_if_empty()
            .push(file);
        Ok(url)
    }
}

/// Generates a unique correlation ID for request tracing.
fn generate_correlation_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp & 0xFFFFFFFF, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> TimetableClient {
        // Port 1 on loopback refuses immediately; no service listens there.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1/data".to_string(),
            ..ClientConfig::default()
        };
        TimetableClient::with_config(config).unwrap()
    }

    #[test]
    fn document_url_joins_onto_base_path() {
        let config = ClientConfig {
            base_url: "http://pages.example/site/data".to_string(),
            ..ClientConfig::default()
        };
        let client = TimetableClient::with_config(config).unwrap();

        let url = client.document_url("group_a.json").unwrap();
        assert_eq!(url.as_str(), "http://pages.example/site/data/group_a.json");
    }

    #[test]
    fn document_url_tolerates_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://pages.example/site/data/".to_string(),
            ..ClientConfig::default()
        };
        let client = TimetableClient::with_config(config).unwrap();

        let url = client.document_url("timetable.json").unwrap();
        assert_eq!(url.as_str(), "http://pages.example/site/data/timetable.json");
    }

    #[test]
    fn rejects_non_base_url() {
        let config = ClientConfig {
            base_url: "mailto:nobody@example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(TimetableClient::with_config(config).is_err());
    }

    #[tokio::test]
    async fn group_fetch_failure_collapses_to_empty() {
        let client = unreachable_client();
        let timetable = client.fetch_group_or_empty("A").await;

        assert_eq!(timetable.group, "A");
        assert!(timetable.entries.is_empty());
        assert_eq!(timetable.total_classes, 0);
    }

    #[tokio::test]
    async fn aggregate_fetch_failure_collapses_to_empty() {
        let client = unreachable_client();
        let response = client.fetch_all_or_empty().await;

        assert!(!response.success);
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn fetch_error_is_reported_as_retryable_network_failure() {
        let client = unreachable_client();
        let err = client.fetch_metadata().await.unwrap_err();

        assert!(err.is_retryable());
    }
}
