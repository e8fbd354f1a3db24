pub mod contact;
pub mod health;
pub mod portfolio;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(portfolio::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/content", get(portfolio::handle_get_content))
        .route(
            "/api/v1/content/cache",
            delete(portfolio::handle_clear_cache),
        )
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}
