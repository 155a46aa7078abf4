//! The reading-companion endpoint.
//!
//! One POST, one reply. `type: "search"` goes to the book-search service and
//! its body is passed through; every other type (absent included) becomes a
//! librarian-persona prompt for the text generator. Every reply is wrapped as
//! `{ "data": ... }`, failures included.

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::{
    ActionRequest, DomainError, GenerationRequest, KindDirective, RequestKind, messages,
};
use crate::api::reply;
use crate::infrastructure::AppState;

/// Request fields, accepted bare or nested under `data`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ActionFields {
    #[serde(rename = "actionTitle")]
    pub action_title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationReply {
    pub response: String,
    /// Echo of the inbound `type`, whatever its JSON type; omitted when the
    /// caller sent none
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Value>,
}

#[utoipa::path(
    post,
    path = "/generatePraise",
    request_body = ActionFields,
    responses(
        (status = 200, description = "Book-search passthrough or generated text", body = GenerationReply),
        (status = 500, description = "Book search failed or internal error"),
        (status = "default", description = "Generator rejected the request; its status is mirrored")
    )
)]
pub async fn generate_praise(State(state): State<AppState>, body: Bytes) -> Response {
    match dispatch(&state, &body).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Function Error: {}", e);
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": messages::INTERNAL_SERVER_ERROR }),
            )
        }
    }
}

async fn dispatch(state: &AppState, body: &[u8]) -> Result<Response, DomainError> {
    let request = ActionRequest::from_body(body)?;
    let kind = request.request_kind();
    tracing::debug!("Dispatching {:?} (type={:?})", kind, request.kind);

    match kind {
        RequestKind::Search => Ok(search(state, &request.input).await),
        _ => generate(state, kind, request).await,
    }
}

/// Search failures are answered here and never reach the outer boundary.
async fn search(state: &AppState, input: &str) -> Response {
    match state.books.search_volumes(input).await {
        Ok(volumes) => reply(StatusCode::OK, volumes),
        Err(e) => {
            tracing::error!("Books API Error: {}", e);
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "items": [], "error": messages::BOOKS_API_FAILED }),
            )
        }
    }
}

async fn generate(
    state: &AppState,
    kind: RequestKind,
    request: ActionRequest,
) -> Result<Response, DomainError> {
    let directive = KindDirective::for_kind(kind);
    let generation = GenerationRequest {
        prompt: directive.build_prompt(&request.input),
        structured_output: directive.structured_output,
    };

    match state
        .generator
        .generate(state.gemini_api_key(), &generation)
        .await
    {
        Ok(text) => Ok(reply(
            StatusCode::OK,
            GenerationReply {
                response: text,
                kind: request.kind,
            },
        )),
        Err(e) => match e.upstream_status() {
            // Upstream body was logged by the client; the caller only gets the message
            Some(status) => {
                let status = StatusCode::from_u16(status).map_err(|err| {
                    DomainError::Internal(format!("Unusable upstream status: {}", err))
                })?;
                Ok(reply(status, json!({ "error": messages::GEMINI_FAILED })))
            }
            None => Err(e),
        },
    }
}
