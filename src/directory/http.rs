//! HTTP implementation of the directory client.
//!
//! Each call is a single GET followed by a JSON decode. There is no retry
//! and no caching: a failed request is reported and the user decides
//! whether to try again.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::client::{DirectoryClient, FetchError};
use super::types::{CategoriesResponse, DEFAULT_BASE_URL, EntriesResponse, Resource};

/// Directory client backed by `reqwest`.
pub struct HttpDirectoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectoryClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `resource` and decodes the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, FetchError> {
        let target = resource.url(&self.base_url);
        let url = url::Url::parse(&target).map_err(|_| FetchError::InvalidUrl(target.clone()))?;

        info!("Directory request: GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        debug!("Directory response status: {}", status);

        if !status.is_success() {
            warn!("Directory returned HTTP {} for {:?}", status.as_u16(), resource);
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        if body.is_empty() {
            warn!("Directory returned an empty body for {:?}", resource);
            return Err(FetchError::EmptyBody);
        }

        debug!("Decoding {} bytes for {:?}", body.len(), resource);
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode {:?} response: {}", resource, e);
            FetchError::Decode(e)
        })
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_entries(&self) -> Result<EntriesResponse, FetchError> {
        let response: EntriesResponse = self.fetch(Resource::Entries).await?;
        info!("Fetched {} entries (count={})", response.entries.len(), response.count);
        Ok(response)
    }

    async fn fetch_categories(&self) -> Result<CategoriesResponse, FetchError> {
        let response: CategoriesResponse = self.fetch(Resource::Categories).await?;
        info!("Fetched {} categories", response.categories.len());
        Ok(response)
    }
}
