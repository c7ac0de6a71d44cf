use super::handlers;
use super::state::AppState;
use super::ws;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Interview socket
        .route("/ws", get(ws::ws_handler))
        // Session inspection
        .route(
            "/interviews/:session_id/status",
            get(handlers::get_session_status),
        )
        .route(
            "/interviews/:session_id/history",
            get(handlers::get_session_history),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
