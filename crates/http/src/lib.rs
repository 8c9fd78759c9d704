//! HTTP server for recipebox.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod page;
mod response_types;

use axum::{Json, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use recipebox_service::RecipeService;

pub use page::render_recipe_page;
pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Read-only recipe queries
    pub recipe_service: Arc<RecipeService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::serve_random_recipe))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/recipe/random", get(handlers::recipes::random_recipe))
        .route("/api/recipes/{id}", get(handlers::recipes::get_recipe))
        .route("/api/stats", get(handlers::recipes::get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
