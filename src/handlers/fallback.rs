use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub success: bool,
    pub error: String,
}

pub async fn fallback_handler(headers: HeaderMap) -> Response {
    // Browsers get a short human-readable page, everything else gets JSON
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let is_browser = user_agent.contains("Mozilla")
        || user_agent.contains("Chrome")
        || user_agent.contains("Safari")
        || user_agent.contains("Firefox")
        || user_agent.contains("Edge");

    if is_browser {
        return (
            StatusCode::NOT_FOUND,
            Html("Nothing to see here. Try <a href=\"/\">/</a> or <a href=\"/live\">/live</a>."),
        )
            .into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            success: false,
            error: "Unknown route. Valid endpoints: /, /live, /api/users, /health".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[tokio::test]
    async fn test_browser_gets_html_404() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            "Mozilla/5.0 (X11; Linux x86_64)".parse().unwrap(),
        );

        let response = fallback_handler(headers).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_non_browser_gets_json_404() {
        let response = fallback_handler(HeaderMap::new()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .starts_with("application/json"));
    }
}
