use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::fetch::source::{DirectSource, RemoteSource, UserSource};
use crate::render::page::{render_data_page, render_failed_page, PageVariant};
use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::error;

/// Client-rendered variant
///
/// GET /
///
/// Reads the record sequence straight out of application state.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let source = DirectSource::new(Arc::clone(&state.records));

    render_from_source(&source, PageVariant::ClientRendered).await
}

/// Server-rendered variant
///
/// GET /live
///
/// Performs a fresh HTTP GET against the retrieval endpoint on every render,
/// so each page view pays the endpoint's simulated latency.
pub async fn live_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let base_url = state.config.upstream_base_url();

    let source = match RemoteSource::new(&base_url) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, base_url = %base_url, "failed to construct upstream client");
            return Ok(Html(render_failed_page()?));
        }
    };

    render_from_source(&source, PageVariant::ServerRendered).await
}

/// Shared render path, agnostic to which source supplies the records.
///
/// Loaded: the source produced a sequence, render cards + raw view.
/// Failed: the source errored, render the static failure page. No retry, no
/// partial state; the next request re-attempts from scratch.
async fn render_from_source<S: UserSource + Sync>(
    source: &S,
    variant: PageVariant,
) -> Result<Html<String>, PageError> {
    match source.produce().await {
        Ok(records) => Ok(Html(render_data_page(variant, &records)?)),
        Err(e) => {
            error!(error = %e, "failed to load user records");
            Ok(Html(render_failed_page()?))
        }
    }
}
