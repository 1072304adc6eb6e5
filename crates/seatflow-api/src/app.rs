//! Application builder — wires stores, services, router, and the server
//! loop together.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tracing::info;

use seatflow_core::config::AppConfig;
use seatflow_core::error::{AppError, ErrorKind};
use seatflow_database::repositories::{
    AssignmentLogRepository, AttendeeRepository, SeatLayoutRepository, SessionRepository,
};
use seatflow_database::store::{
    AssignmentLogStore, AttendeeStore, SeatLayoutStore, SessionStore,
};
use seatflow_service::{AssignmentLogger, RegistrationService, SeatCommitter, SeatMapService};

use crate::router::build_router;
use crate::state::AppState;

/// Build the application state over the PostgreSQL repositories.
pub fn build_state(config: Arc<AppConfig>, pool: PgPool) -> AppState {
    let attendees: Arc<dyn AttendeeStore> = Arc::new(AttendeeRepository::new(pool.clone()));
    let layouts: Arc<dyn SeatLayoutStore> = Arc::new(SeatLayoutRepository::new(pool.clone()));
    let logs: Arc<dyn AssignmentLogStore> = Arc::new(AssignmentLogRepository::new(pool.clone()));
    let sessions: Arc<dyn SessionStore> = Arc::new(SessionRepository::new(pool));

    build_state_with_stores(config, attendees, layouts, logs, sessions)
}

/// Build the application state over arbitrary store implementations.
///
/// The integration suite uses this with the in-memory stores so the
/// router can be driven without a database.
pub fn build_state_with_stores(
    config: Arc<AppConfig>,
    attendees: Arc<dyn AttendeeStore>,
    layouts: Arc<dyn SeatLayoutStore>,
    logs: Arc<dyn AssignmentLogStore>,
    sessions: Arc<dyn SessionStore>,
) -> AppState {
    let committer = SeatCommitter::new(Arc::clone(&attendees));
    let logger = AssignmentLogger::new(Arc::clone(&logs));
    let registration = Arc::new(RegistrationService::new(
        Arc::clone(&attendees),
        Arc::clone(&layouts),
        committer,
        logger,
    ));
    let seat_maps = Arc::new(SeatMapService::new(
        Arc::clone(&sessions),
        Arc::clone(&layouts),
        Arc::clone(&attendees),
    ));

    AppState {
        config,
        registration,
        seat_maps,
        attendees,
        logs,
        sessions,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Seatflow server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(Arc::new(config), pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(%addr, "Seatflow server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Seatflow server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
