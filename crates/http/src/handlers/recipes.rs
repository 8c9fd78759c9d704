use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use recipebox_core::RecipeCard;
use recipebox_storage::RecipeStats;
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn random_recipe(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecipeCard>, ApiError> {
    Ok(Json(state.recipe_service.random_recipe().await?))
}

pub async fn get_recipe(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RecipeCard>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state
        .recipe_service
        .recipe_card(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("recipe '{id}' not found")))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<RecipeStats>, ApiError> {
    Ok(Json(state.recipe_service.stats().await?))
}
