//! Domain error types
//!
//! These errors are framework-agnostic. The dispatcher turns every one of them
//! into a normalized `{ data: ... }` reply; none escapes the handler.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Transport failure talking to an upstream (connect, timeout, body read)
    Network(String),
    /// Upstream answered with a body that is not the JSON we expect
    InvalidBody(String),
    /// Upstream answered with a non-success HTTP status
    UpstreamRejected { status: u16, body: String },
    /// Inbound body could not be understood
    MalformedRequest(String),
    /// Generic internal error
    Internal(String),
}

impl DomainError {
    /// Status code to mirror back to the caller, if the upstream chose one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            DomainError::UpstreamRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::InvalidBody(msg) => write!(f, "Invalid upstream body: {}", msg),
            DomainError::UpstreamRejected { status, body } => {
                write!(f, "Upstream rejected request with status {}: {}", status, body)
            }
            DomainError::MalformedRequest(msg) => write!(f, "Malformed request: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::InvalidBody(e.to_string())
    }
}
