//! Application state containing upstream gateways and the API credential

use secrecy::SecretString;
use std::sync::Arc;

use crate::domain::{BookSearch, DomainError, TextGenerator};
use crate::infrastructure::config::Config;
use crate::modules::integrations::{GeminiClient, GoogleBooksClient};

/// Application state shared across all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Book-search gateway
    pub books: Arc<dyn BookSearch>,
    /// Generative-text gateway
    pub generator: Arc<dyn TextGenerator>,
    gemini_api_key: Arc<SecretString>,
}

impl AppState {
    pub fn new(
        books: Arc<dyn BookSearch>,
        generator: Arc<dyn TextGenerator>,
        gemini_api_key: SecretString,
    ) -> Self {
        Self {
            books,
            generator,
            gemini_api_key: Arc::new(gemini_api_key),
        }
    }

    /// Wire the real HTTP clients from configuration
    pub fn from_config(config: Config) -> Result<Self, DomainError> {
        let books = GoogleBooksClient::new(&config.books_base_url, config.request_timeout)?;
        let generator = GeminiClient::new(
            &config.gemini_base_url,
            &config.gemini_model,
            config.request_timeout,
        )?;

        Ok(Self::new(
            Arc::new(books),
            Arc::new(generator),
            config.gemini_api_key,
        ))
    }

    pub fn gemini_api_key(&self) -> &SecretString {
        &self.gemini_api_key
    }
}
