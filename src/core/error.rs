// Centralized error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors produced while obtaining the user record sequence.
///
/// Only the remote-fetch strategy can realistically produce these; every
/// variant is terminal for the render pass that hit it. The page handler
/// converts them into the failed-state page, so none of them cross the HTTP
/// boundary directly.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned status {status}")]
    UpstreamStatus { status: StatusCode },

    #[error("failed to decode upstream response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to construct HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors raised while assembling a page response
#[derive(Error, Debug)]
pub enum PageError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to serialize user records: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page rendering failed");

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_display() {
        let err = FetchError::UpstreamStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };

        assert_eq!(
            err.to_string(),
            "upstream returned status 503 Service Unavailable"
        );
    }

    #[test]
    fn test_page_error_is_internal_error() {
        let err = PageError::Serialize(serde_json::from_str::<u32>("x").unwrap_err());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
