use anyhow::{Context, Result};
use recipebox_http::{AppState, create_router};
use recipebox_service::RecipeService;
use recipebox_storage::Storage;
use std::sync::Arc;

use crate::get_db_path;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let db_path = get_db_path();
    let storage = Storage::open_read_only(&db_path)
        .with_context(|| format!("cannot open {} for serving", db_path.display()))?;

    let recipe_service = Arc::new(RecipeService::new(Arc::new(storage)));
    match recipe_service.stats().await {
        Ok(stats) if stats.recipe_count == 0 => {
            tracing::warn!("Database has no recipes yet; pages will be empty until an import");
        },
        Ok(stats) => tracing::info!(recipes = stats.recipe_count, "Recipes available"),
        Err(e) => tracing::warn!("Could not count recipes: {}", e),
    }

    let state = Arc::new(AppState { recipe_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
