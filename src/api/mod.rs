pub mod generate_praise;
pub mod health;

use axum::{
    BoxError, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;

use crate::domain::messages;
use crate::infrastructure::AppState;

#[derive(Serialize)]
struct Envelope<T> {
    data: T,
}

/// Every reply of this service is `{ "data": <payload> }`.
pub(crate) fn reply<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(Envelope { data: payload })).into_response()
}

/// Errors from the middleware stack (request deadline) keep the envelope.
pub async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::error!("Request timed out");
    } else {
        tracing::error!("Middleware error: {}", err);
    }
    reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": messages::INTERNAL_SERVER_ERROR }),
    )
}

/// Routes served at the site root, where the mobile client calls the function.
pub fn root_router(state: AppState) -> Router {
    Router::new()
        .route("/generatePraise", post(generate_praise::generate_praise))
        .with_state(state)
}

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/generatePraise", post(generate_praise::generate_praise))
        .with_state(state)
}
