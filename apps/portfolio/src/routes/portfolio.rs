//! Axum route handlers for the portfolio page and its content.

use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::content::defaults::certifications;
use crate::content::models::{ContentSource, PortfolioContent};
use crate::content::resolver::resolve;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::CACHE_KEY;
use crate::view::dom::Document;
use crate::view::page::build_page;
use crate::view::populate::populate_certifications;

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub source: ContentSource,
    pub content: PortfolioContent,
}

/// GET /
///
/// Renders the full page. Each request is one page load: one pass through
/// the resolution chain.
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut doc = build_page(Utc::now().year());
    populate_certifications(&mut doc, certifications());

    let resolved = resolve(state.store.as_ref(), state.generator.as_ref(), &mut doc).await?;
    debug!("Serving page with {:?} content", resolved.source);

    Ok(Html(doc.to_html()))
}

/// GET /api/v1/content
///
/// Runs the same resolution chain and returns the content as JSON.
pub async fn handle_get_content(
    State(state): State<AppState>,
) -> Result<Json<ContentResponse>, AppError> {
    // No containers, so population is a no-op.
    let mut doc = Document::empty();
    let resolved = resolve(state.store.as_ref(), state.generator.as_ref(), &mut doc).await?;

    Ok(Json(ContentResponse {
        source: resolved.source,
        content: resolved.content,
    }))
}

/// DELETE /api/v1/content/cache
///
/// Drops the cached entry so the next request regenerates content.
pub async fn handle_clear_cache(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.delete(CACHE_KEY).await?;
    info!("Cleared cached portfolio content ({} store)", state.store.backend());
    Ok(StatusCode::NO_CONTENT)
}
