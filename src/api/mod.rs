//! REST API for workshop load calculations.
//!
//! Provides three endpoints:
//! - `POST /api/calculate`: workshop result for an equipment list
//! - `POST /api/equipment`: derived values for a single record
//! - `GET /health`: liveness probe

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::load::WorkshopTotals;

pub use types::ErrorResponse;

/// Immutable application state shared across all request handlers.
///
/// Constructed once at start-up and wrapped in `Arc`; no locks are needed
/// since the reference tables are static and this state is read-only.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Survey totals used when a request carries none.
    pub workshop: WorkshopTotals,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/equipment", post(handlers::equipment))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
