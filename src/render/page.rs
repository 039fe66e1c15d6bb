use crate::core::error::PageError;
use crate::core::routes::USERS_PATH;
use crate::models::user::UserRecord;
use crate::render::roles::{avatar_label, role_tag_class};
use askama::Template;

/// User-visible message shown when the remote fetch fails.
pub const FAILED_MESSAGE: &str = "Failed to load user data. Is the server running?";

/// Which page shell is hosting the rendered data.
///
/// The two variants differ only in their copy and example snippet; the data
/// projection itself is identical regardless of where the records came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageVariant {
    /// `/`: records read in-process, no HTTP hop
    ClientRendered,
    /// `/live`: records fetched from the retrieval endpoint
    ServerRendered,
}

impl PageVariant {
    fn title(self) -> &'static str {
        match self {
            PageVariant::ClientRendered => "Mock API Data Server",
            PageVariant::ServerRendered => "Live API Data Server",
        }
    }

    fn tagline(self) -> &'static str {
        match self {
            PageVariant::ClientRendered => {
                "This page renders a static dataset directly, without any HTTP round trip."
            }
            PageVariant::ServerRendered => {
                "This page fetches its data from the retrieval endpoint before rendering."
            }
        }
    }

    fn fetch_note(self) -> &'static str {
        match self {
            PageVariant::ClientRendered => {
                "A real application would issue an HTTP GET request to the endpoint below \
                 to retrieve this data as JSON."
            }
            PageVariant::ServerRendered => {
                "The data above was fetched from the live endpoint below. You can call it \
                 from any HTTP client."
            }
        }
    }

    fn snippet_label(self) -> &'static str {
        match self {
            PageVariant::ClientRendered => "A minimal server for this data",
            PageVariant::ServerRendered => "The route handler behind this page",
        }
    }

    fn snippet(self) -> &'static str {
        match self {
            PageVariant::ClientRendered => STANDALONE_SERVER_SNIPPET,
            PageVariant::ServerRendered => ROUTE_HANDLER_SNIPPET,
        }
    }
}

/// Per-record projection consumed by the card grid.
pub struct CardView {
    pub avatar: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub tag_class: &'static str,
}

impl CardView {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            avatar: avatar_label(&record.name),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            tag_class: role_tag_class(&record.role),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct DataPageTemplate {
    title: &'static str,
    tagline: &'static str,
    fetch_note: &'static str,
    snippet_label: &'static str,
    snippet: &'static str,
    endpoint: &'static str,
    cards: Vec<CardView>,
    raw_json: String,
}

#[derive(Template)]
#[template(path = "failed.html")]
struct FailedPageTemplate {
    message: &'static str,
}

/// Render the full data page for a record sequence.
///
/// Pure and deterministic: the same records and variant always produce the
/// same markup.
pub fn render_data_page(variant: PageVariant, records: &[UserRecord]) -> Result<String, PageError> {
    let template = DataPageTemplate {
        title: variant.title(),
        tagline: variant.tagline(),
        fetch_note: variant.fetch_note(),
        snippet_label: variant.snippet_label(),
        snippet: variant.snippet(),
        endpoint: USERS_PATH,
        cards: records.iter().map(CardView::from_record).collect(),
        raw_json: serde_json::to_string_pretty(records)?,
    };

    Ok(template.render()?)
}

/// Render the failed-state page shown when the fetch step did not succeed.
pub fn render_failed_page() -> Result<String, PageError> {
    let template = FailedPageTemplate {
        message: FAILED_MESSAGE,
    };

    Ok(template.render()?)
}

const STANDALONE_SERVER_SNIPPET: &str = r#"use axum::{routing::get, Json, Router};

#[tokio::main]
async fn main() {
    let app = Router::new().route("/api/users", get(|| async { Json(seed_users()) }));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    axum::serve(listener, app).await.unwrap();
}"#;

const ROUTE_HANDLER_SNIPPET: &str = r#"pub async fn users_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // Simulate a real-world lookup cost before answering
    let delay = state.config.api.delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    Json(state.records.as_ref().clone())
}"#;
