use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Readiness probe: checks the database connection.
///
/// Liveness (`/health`) is served by `axum_helpers::health_router`; this
/// endpoint reports whether the app can actually do work.
pub async fn ready_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match database::postgres::ping(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "ready": true, "services": { "database": true } })),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ready": false, "services": { "database": false } })),
            )
        }
    }
}
