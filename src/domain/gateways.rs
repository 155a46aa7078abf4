//! Upstream gateway traits
//!
//! These traits define the contract for the two outbound services.
//! Implementations live in `modules::integrations`.

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;

use super::DomainError;

/// Public book-search service.
#[async_trait]
pub trait BookSearch: Send + Sync {
    /// Search volumes by free text and hand back the upstream body untouched.
    async fn search_volumes(&self, query: &str) -> Result<Value, DomainError>;
}

/// One generation call: a single prompt plus the output-format switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub structured_output: bool,
}

/// Generative-text service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the first text fragment of the first candidate, or an empty
    /// string when the upstream reply has none.
    async fn generate(
        &self,
        api_key: &SecretString,
        request: &GenerationRequest,
    ) -> Result<String, DomainError>;
}
