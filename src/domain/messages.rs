//! Caller-facing failure messages. Upstream bodies and stack traces never go out.

pub const BOOKS_API_FAILED: &str = "Books API 呼び出しに失敗しました";
pub const GEMINI_FAILED: &str = "Gemini連携に失敗しました";
pub const INTERNAL_SERVER_ERROR: &str = "サーバー内部エラーが発生しました";
