use secrecy::SecretString;
use std::env;
use std::time::Duration;

use crate::modules::integrations::{gemini, google_books};

pub struct Config {
    pub port: u16,
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub books_base_url: String,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            // Missing key is not fatal: the upstream rejects and the caller sees
            // the usual Gemini failure reply.
            gemini_api_key: SecretString::new(env::var("GEMINI_API_KEY").unwrap_or_default()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| gemini::DEFAULT_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| gemini::DEFAULT_BASE_URL.to_string()),
            books_base_url: env::var("BOOKS_BASE_URL")
                .unwrap_or_else(|_| google_books::DEFAULT_BASE_URL.to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}
