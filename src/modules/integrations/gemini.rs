//! Gemini `generateContent` integration
//!
//! Sends a single-part prompt and reads back only the first text fragment of
//! the first candidate.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::{DomainError, GenerationRequest, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

/// Serializes to `{}` unless structured output was asked for.
#[derive(Debug, Default, Serialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<&'static str>,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(req: &GenerationRequest) -> Self {
        let generation_config = if req.structured_output {
            GenerationConfig {
                response_mime_type: Some(JSON_MIME_TYPE),
            }
        } else {
            GenerationConfig::default()
        };

        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: req.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }
}

/// `candidates[0].content.parts[0].text`, or `""` at the first missing link.
pub fn first_candidate_text(body: &Value) -> String {
    body.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn endpoint(&self, api_key: &SecretString) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(api_key.expose_secret())
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        api_key: &SecretString,
        request: &GenerationRequest,
    ) -> Result<String, DomainError> {
        let body = GenerateContentRequest::from(request);
        tracing::debug!(
            "Gemini generateContent: model={} structured={} prompt.len={}",
            self.model,
            request.structured_output,
            request.prompt.len()
        );

        let resp = self
            .http
            .post(self.endpoint(api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await.unwrap_or_default();
            tracing::error!("Gemini API Error ({}): {}", status, error_body);
            return Err(DomainError::UpstreamRejected {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let text = resp.text().await?;
        let parsed: Value = serde_json::from_str(&text)?;

        Ok(first_candidate_text(&parsed))
    }
}
