// HTTP routes configuration

use crate::core::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Path of the retrieval endpoint; also the annotation on the raw-JSON view.
pub const USERS_PATH: &str = "/api/users";

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(crate::handlers::pages::index_handler))
        .route("/live", get(crate::handlers::pages::live_handler))

        // Data + liveness
        .route(USERS_PATH, get(crate::handlers::users::users_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
