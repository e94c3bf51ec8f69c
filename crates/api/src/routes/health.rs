use axum::extract::State;
use axum::{routing::get, Json, Router};
use sara_core::types::EpochMillis;
use sara_db::{Backend, StoreCounts};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Server time in epoch milliseconds.
    pub timestamp: EpochMillis,
    /// Storage backend in use.
    pub backend: Backend,
    /// Record counts; omitted when the backend cannot be counted.
    #[serde(flatten)]
    pub counts: Option<StoreCounts>,
}

/// GET /api/health -- returns liveness and collection counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store().await;

    let counts = match store.counts().await {
        Ok(counts) => Some(counts),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not count collections");
            None
        }
    };
    let status = if counts.is_some() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: store.clock.now().timestamp_millis(),
        backend: store.backend(),
        counts,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
