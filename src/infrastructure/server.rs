// Server module - router assembly and listener startup

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::HeaderValue;
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

/// Build the CORS layer. No configured origins means any origin may call.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let mut origins = Vec::new();
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    cors.allow_origin(origins)
}

/// Build the full application: the dispatcher at the root and under `/api`,
/// health, and the OpenAPI document.
pub fn build_router(state: AppState, allowed_origins: &[String], timeout: Duration) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::root_router(state.clone()))
        .nest("/api", api::api_router_with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(api::handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}

/// Find an available port starting from the preferred port on a specific IP
pub fn find_available_port_on_ip(preferred_port: u16, ip: &str) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind((ip, preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind((ip, port)).is_ok())
}

/// Bind and serve until the process is stopped
pub async fn serve(app: Router, preferred_port: u16) -> Result<(), String> {
    let port = find_available_port_on_ip(preferred_port, "0.0.0.0")
        .ok_or_else(|| "Failed to find available port".to_string())?;

    if port != preferred_port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            preferred_port,
            port
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("shisho listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_free_port() {
        let taken = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = taken.local_addr().unwrap().port();
        let found = find_available_port_on_ip(port, "127.0.0.1").unwrap();
        assert_ne!(found, port);
    }

    #[test]
    fn invalid_origins_are_skipped() {
        // Building must not panic on a bad header value
        let _ = cors_layer(&["https://ok.example".to_string(), "bad\norigin".to_string()]);
    }
}
