use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use buildnote_store::repositories::ProjectRepo;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of projects in the fixture dataset.
    pub projects: usize,
}

/// GET /health -- returns service status and dataset size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let projects = ProjectRepo::list(&state.store).await.len();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        projects,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
