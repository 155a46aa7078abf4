//! Google Books volumes search
//!
//! The response body is handed back as-is; the client app reads the
//! `items[].volumeInfo` records itself.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::domain::{BookSearch, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Results per search, the Books API maximum.
pub const MAX_RESULTS: u32 = 20;
/// Japanese-language volumes only.
pub const LANG_RESTRICT: &str = "ja";

pub struct GoogleBooksClient {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn volumes_url(&self, query: &str) -> String {
        format!(
            "{}/volumes?q={}&maxResults={}&langRestrict={}",
            self.base_url,
            urlencoding::encode(query),
            MAX_RESULTS,
            LANG_RESTRICT
        )
    }
}

#[async_trait]
impl BookSearch for GoogleBooksClient {
    async fn search_volumes(&self, query: &str) -> Result<Value, DomainError> {
        let url = self.volumes_url(query);
        tracing::debug!("Google Books search: q={}", query);

        // No key: the volumes endpoint is public
        let resp = self.http.get(&url).send().await?;
        let body = resp.text().await?;
        let parsed: Value = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}
