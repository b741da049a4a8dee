use async_trait::async_trait;
use thiserror::Error;

use super::types::{CategoriesResponse, EntriesResponse};

/// Everything that can go wrong between asking for a resource and holding
/// a decoded response, plus the link-opening failure that shares the same
/// error dialog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A URL (request target or documentation link) could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Connection, DNS, TLS or body read failure.
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Server answered with a status outside 200..300.
    #[error("bad response (HTTP {0})")]
    BadStatus(u16),
    /// Server answered successfully but sent no body.
    #[error("response had no data")]
    EmptyBody,
    /// Body did not match the expected JSON shape.
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Read-only access to the public API directory.
///
/// One HTTP implementation ships with the crate; tests swap in a stub.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn fetch_entries(&self) -> Result<EntriesResponse, FetchError>;

    async fn fetch_categories(&self) -> Result<CategoriesResponse, FetchError>;
}
