//! Route definitions and router construction.
//!
//! Handlers delegate to the shared `MentorService`.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => CorsLayer::new()
            .allow_origin(parse_origins(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

/// Convert configured origins to header values, skipping any that are not
/// valid header text.
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Build all API routes without `/api` prefix (for nesting under /api).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Planning API
        .route("/verify-phase1", post(handlers::planning::verify_phase1))
        .route("/simulate", post(handlers::planning::simulate))
        .route(
            "/guided-questions",
            post(handlers::planning::guided_questions),
        )
        // Mentor chat
        .route("/chat", post(handlers::chat::chat))
}

/// Create the main Axum router with all routes.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_keeps_valid_entries() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "https://mate.example.com".to_string(),
        ];
        let parsed = parse_origins(&origins);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], "http://localhost:5173");
    }

    #[test]
    fn test_parse_origins_skips_invalid_entries() {
        let origins = vec![
            "http://bad\norigin".to_string(),
            "https://mate.example.com".to_string(),
        ];
        let parsed = parse_origins(&origins);
        assert_eq!(parsed, vec![HeaderValue::from_static("https://mate.example.com")]);
    }
}
