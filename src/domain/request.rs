//! Inbound action request and its normalization.
//!
//! Clients call the endpoint two ways: through a callable wrapper that nests
//! the payload under `data`, or with a plain POST of the bare object. Both are
//! folded into one [`ActionRequest`] here, before any dispatch happens.

use serde_json::Value;

use super::DomainError;

/// Placeholder used whenever `actionTitle` is missing or empty.
pub const DEFAULT_INPUT: &str = "読書";

/// Discriminant of the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Search,
    Task,
    Praise,
    Prophecy,
    /// Absent or unrecognized `type`
    Other,
}

impl RequestKind {
    /// Exact, case-sensitive match on the raw tag.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("search") => RequestKind::Search,
            Some("task") => RequestKind::Task,
            Some("praise") => RequestKind::Praise,
            Some("prophecy") => RequestKind::Prophecy,
            _ => RequestKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    /// Free text, already defaulted
    pub input: String,
    /// Raw `type` value exactly as sent, echoed back untouched
    pub kind: Option<Value>,
}

/// Loose truthiness of mobile-client payloads: `null`, `false`, `0` and `""`
/// count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a scalar title: `42` -> "42", `true` -> "true".
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl ActionRequest {
    /// Parse a raw request body. An empty body counts as `{}`.
    pub fn from_body(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Self::from_value(&Value::Object(Default::default()));
        }
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| DomainError::MalformedRequest(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Normalize an already-parsed body, preferring a truthy `data` wrapper.
    /// A payload that is not an object simply has no fields.
    pub fn from_value(body: &Value) -> Result<Self, DomainError> {
        if body.is_null() {
            return Err(DomainError::MalformedRequest(
                "request body is null".to_string(),
            ));
        }

        let payload = match body.get("data") {
            Some(data) if is_truthy(data) => data,
            _ => body,
        };

        let input = payload
            .get("actionTitle")
            .filter(|v| is_truthy(v))
            .map(stringify)
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());

        let kind = payload.get("type").cloned();

        Ok(Self { input, kind })
    }

    /// Only string tags select a kind; anything else falls back.
    pub fn request_kind(&self) -> RequestKind {
        RequestKind::from_tag(self.kind.as_ref().and_then(Value::as_str))
    }
}
