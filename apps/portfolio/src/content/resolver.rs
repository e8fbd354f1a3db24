//! Content Resolver — picks the content to render, in strict priority order:
//! cached copy → remote generation → compiled-in defaults.
//!
//! Flow: store.get → JSON parse → render (done), or
//!       delete invalid entry → generate → extract_json → render → store.set, or
//!       render default_content() with no cache write.
//!
//! Exactly one remote attempt per resolution; no retries.

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::content::defaults::default_content;
use crate::content::generator::ContentGenerator;
use crate::content::models::{ContentSource, PortfolioContent};
use crate::llm_client::fence::{extract_json, FenceError};
use crate::llm_client::prompts::{portfolio_schema, PORTFOLIO_PROMPT};
use crate::llm_client::{LlmError, JSON_MIME_TYPE, MODEL};
use crate::store::{ContentStore, CACHE_KEY};
use crate::view::dom::Document;
use crate::view::populate::populate;

/// Failures absorbed inside the resolver. None of these reach the caller.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("cached content is not valid JSON: {0}")]
    CacheParse(serde_json::Error),

    #[error("remote request failed: {0}")]
    RemoteRequest(#[from] LlmError),

    #[error("remote response could not be parsed: {0}")]
    ResponseParse(#[from] FenceError),

    #[error("remote response does not match the content shape: {0}")]
    SchemaViolation(serde_json::Error),
}

/// Failures that escape the resolver.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The cached entry is valid JSON but not a `PortfolioContent`.
    /// The cache is only syntax-checked, so this surfaces at render time
    /// and is not downgraded to the default content.
    #[error("cached content does not match the content shape: {0}")]
    MalformedCache(serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub content: PortfolioContent,
    pub source: ContentSource,
}

/// Resolves portfolio content and populates `doc` with it.
pub async fn resolve(
    store: &dyn ContentStore,
    generator: &dyn ContentGenerator,
    doc: &mut Document,
) -> Result<Resolved, ResolveError> {
    if let Some(cached) = read_cache(store).await {
        match serde_json::from_str::<Value>(&cached) {
            Ok(value) => {
                let content: PortfolioContent =
                    serde_json::from_value(value).map_err(ResolveError::MalformedCache)?;
                populate(doc, &content);
                info!("Rendered portfolio content from {} cache", store.backend());
                return Ok(Resolved {
                    content,
                    source: ContentSource::Cache,
                });
            }
            Err(e) => {
                warn!("{}; clearing cache entry", ResolutionError::CacheParse(e));
                if let Err(e) = store.delete(CACHE_KEY).await {
                    warn!("Failed to clear invalid cache entry: {e}");
                }
            }
        }
    }

    match fetch_generated(generator).await {
        Ok(content) => {
            populate(doc, &content);
            write_cache(store, &content).await;
            info!(
                "Rendered generated portfolio content ({} skills, {} projects)",
                content.skills.len(),
                content.projects.len()
            );
            Ok(Resolved {
                content,
                source: ContentSource::Generated,
            })
        }
        Err(e) => {
            error!("Content generation failed, rendering defaults: {e}");
            let content = default_content();
            populate(doc, &content);
            Ok(Resolved {
                content,
                source: ContentSource::Fallback,
            })
        }
    }
}

async fn read_cache(store: &dyn ContentStore) -> Option<String> {
    match store.get(CACHE_KEY).await {
        Ok(cached) => cached,
        Err(e) => {
            warn!("Cache read failed on {} store, treating as empty: {e}", store.backend());
            None
        }
    }
}

async fn fetch_generated(
    generator: &dyn ContentGenerator,
) -> Result<PortfolioContent, ResolutionError> {
    let schema = portfolio_schema();
    let response = generator
        .generate(MODEL, PORTFOLIO_PROMPT, &schema, JSON_MIME_TYPE)
        .await?;
    let value = extract_json(&response.text)?;
    serde_json::from_value(value).map_err(ResolutionError::SchemaViolation)
}

/// A failed write leaves the page rendered; the next resolution simply regenerates.
async fn write_cache(store: &dyn ContentStore, content: &PortfolioContent) {
    let serialized = match serde_json::to_string(content) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to serialize content for cache: {e}");
            return;
        }
    };
    if let Err(e) = store.set(CACHE_KEY, &serialized).await {
        warn!("Failed to write content to {} cache: {e}", store.backend());
    }
}
