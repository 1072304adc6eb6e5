//! Route definitions for the Seatflow HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(registration_routes())
        .merge(session_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// The allocation endpoint and the read-only identity lookup.
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::registration::register))
        .route("/attendees/lookup", post(handlers::attendee::lookup))
}

/// Read-side session views: seat map, stats, assignment log.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/{id}/seat-map", get(handlers::session::seat_map))
        .route("/sessions/{id}/stats", get(handlers::session::stats))
        .route("/sessions/{id}/logs", get(handlers::logs::search_logs))
        .route(
            "/sessions/{id}/logs/summary",
            get(handlers::logs::summarize_logs),
        )
}

/// Liveness endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
