use crate::core::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub timestamp: i64,
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            users: state.records.len(),
            timestamp,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::data::seed::seed_users;

    #[tokio::test]
    async fn test_health_handler() {
        let state = Arc::new(AppState::new(Config::default(), seed_users()));
        let response = health_handler(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_reports_dataset_size() {
        use axum::body::Body;
        use http_body_util::BodyExt;

        let state = Arc::new(AppState::new(Config::default(), seed_users()));
        let response = health_handler(State(state)).await.into_response();

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::OK);

        let body = Body::new(body);
        let bytes = body.collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.users, seed_users().len());
        assert!(health.timestamp > 0);
    }
}
