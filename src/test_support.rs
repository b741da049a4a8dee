//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::directory::{CategoriesResponse, DirectoryClient, EntriesResponse, Entry, FetchError};

/// Directory client returning canned data, or a canned HTTP status failure.
pub struct StubDirectoryClient {
    pub entries: Vec<Entry>,
    pub categories: Vec<String>,
    pub fail_with_status: Option<u16>,
}

impl StubDirectoryClient {
    pub fn new(entries: Vec<Entry>, categories: Vec<String>) -> Self {
        Self {
            entries,
            categories,
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            entries: Vec::new(),
            categories: Vec::new(),
            fail_with_status: Some(status),
        }
    }
}

#[async_trait]
impl DirectoryClient for StubDirectoryClient {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_entries(&self) -> Result<EntriesResponse, FetchError> {
        if let Some(status) = self.fail_with_status {
            return Err(FetchError::BadStatus(status));
        }
        Ok(EntriesResponse {
            count: self.entries.len() as i64,
            entries: self.entries.clone(),
        })
    }

    async fn fetch_categories(&self) -> Result<CategoriesResponse, FetchError> {
        if let Some(status) = self.fail_with_status {
            return Err(FetchError::BadStatus(status));
        }
        Ok(CategoriesResponse {
            count: self.categories.len() as i64,
            categories: self.categories.clone(),
        })
    }
}

/// Builds an entry with the given name and category; other fields are filler.
pub fn entry(name: &str, category: &str) -> Entry {
    Entry {
        name: name.to_string(),
        description: format!("{name} description"),
        auth: String::new(),
        https: true,
        cors: "unknown".to_string(),
        link: format!("https://example.com/{}", name.to_lowercase().replace(' ', "-")),
        category: category.to_string(),
    }
}

/// Cat Facts and Dog API under Animals, Zip Lookup under Geocoding.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry("Cat Facts", "Animals"),
        entry("Dog API", "Animals"),
        entry("Zip Lookup", "Geocoding"),
    ]
}

/// Creates a test App with an empty stub client.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubDirectoryClient::new(Vec::new(), Vec::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_returns_canned_entries() {
        let stub = StubDirectoryClient::new(sample_entries(), vec!["Animals".to_string()]);
        let response = tokio_test::block_on(stub.fetch_entries()).unwrap();
        assert_eq!(response.count, 3);
        assert_eq!(response.entries, sample_entries());
        let categories = tokio_test::block_on(stub.fetch_categories()).unwrap();
        assert_eq!(categories.categories, vec!["Animals"]);
    }

    #[test]
    fn test_stub_can_fail() {
        let stub = StubDirectoryClient::failing(502);
        assert!(matches!(
            tokio_test::block_on(stub.fetch_entries()),
            Err(FetchError::BadStatus(502))
        ));
    }
}
