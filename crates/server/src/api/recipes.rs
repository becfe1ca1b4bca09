//! Recipe API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use recipebook_core::Recipe;

use super::handlers::{error_response, store_error, ApiError};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Request body for creating a recipe
#[derive(Debug, Deserialize)]
pub struct CreateRecipeBody {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/recipes
pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let recipes = state.recipes().list().map_err(store_error)?;
    let total = recipes.len();
    Ok(Json(RecipeListResponse { recipes, total }))
}

/// POST /api/v1/recipes
///
/// Create an empty recipe.
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRecipeBody>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let recipe = state
        .recipes()
        .save(Recipe::new(body.description))
        .map_err(store_error)?;
    info!(recipe_id = %recipe.id, "Created recipe");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /api/v1/recipes/{recipe_id}
pub async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    match state.recipes().find_by_id(&recipe_id) {
        Ok(Some(recipe)) => Ok(Json(recipe)),
        Ok(None) => Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Recipe not found: {}", recipe_id),
        )),
        Err(e) => Err(store_error(e)),
    }
}
