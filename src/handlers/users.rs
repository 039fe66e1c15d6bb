use crate::core::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

/// Retrieval endpoint
///
/// GET /api/users
///
/// Suspends for the configured artificial delay to simulate a real lookup
/// cost, then returns the full record sequence as a JSON array in insertion
/// order. No parameters honored, no authentication. The sleep is a
/// suspension point, not a thread block, so concurrent requests each measure
/// their own delay independently.
pub async fn users_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let delay = state.config.api.delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    Json(state.records.as_ref().clone())
}
