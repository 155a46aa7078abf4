//! Outbound integrations with third-party APIs.

pub mod gemini;
pub mod google_books;

pub use gemini::GeminiClient;
pub use google_books::GoogleBooksClient;
