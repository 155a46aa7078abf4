//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest calls).
//! Request normalization, persona directives, gateway traits and error types.

pub mod directive;
pub mod errors;
pub mod gateways;
pub mod messages;
pub mod request;

pub use directive::KindDirective;
pub use errors::DomainError;
pub use gateways::*;
pub use request::{ActionRequest, RequestKind, DEFAULT_INPUT};
