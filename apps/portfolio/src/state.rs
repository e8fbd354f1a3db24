use std::sync::Arc;

use crate::content::generator::ContentGenerator;
use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the single cached content entry. Memory or Redis, chosen at startup.
    pub store: Arc<dyn ContentStore>,
    /// Remote generator consulted when the cache is empty or invalid.
    pub generator: Arc<dyn ContentGenerator>,
}
