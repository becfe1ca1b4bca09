//! Ingredient API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use recipebook_core::{DeleteOutcome, IngredientCommand};

use super::handlers::{ingredient_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IngredientListResponse {
    pub recipe_id: String,
    pub ingredients: Vec<IngredientCommand>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteIngredientResponse {
    pub outcome: DeleteOutcome,
}

/// GET /api/v1/recipes/{recipe_id}/ingredients
pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
) -> Result<Json<IngredientListResponse>, ApiError> {
    let ingredients = state
        .ingredients()
        .list_ingredients(&recipe_id)
        .map_err(ingredient_error)?;
    let total = ingredients.len();
    Ok(Json(IngredientListResponse {
        recipe_id,
        ingredients,
        total,
    }))
}

/// GET /api/v1/recipes/{recipe_id}/ingredients/{id}
pub async fn get_ingredient(
    State(state): State<Arc<AppState>>,
    Path((recipe_id, id)): Path<(String, String)>,
) -> Result<Json<IngredientCommand>, ApiError> {
    state
        .ingredients()
        .find_by_recipe_and_ingredient_id(&recipe_id, &id)
        .map(Json)
        .map_err(ingredient_error)
}

/// POST /api/v1/recipes/{recipe_id}/ingredients
///
/// Update the ingredient named by the body's `id`, or add it if the recipe
/// has no such ingredient. The recipe id in the path wins over the body.
pub async fn upsert_ingredient(
    State(state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
    Json(mut command): Json<IngredientCommand>,
) -> Result<Json<IngredientCommand>, ApiError> {
    command.recipe_id = recipe_id;
    state
        .ingredients()
        .upsert_ingredient(&command)
        .map(Json)
        .map_err(ingredient_error)
}

/// DELETE /api/v1/recipes/{recipe_id}/ingredients/{id}
///
/// Always succeeds unless the store fails; the outcome says what happened.
pub async fn delete_ingredient(
    State(state): State<Arc<AppState>>,
    Path((recipe_id, id)): Path<(String, String)>,
) -> Result<Json<DeleteIngredientResponse>, ApiError> {
    state
        .ingredients()
        .delete_ingredient_by_id(&recipe_id, &id)
        .map(|outcome| Json(DeleteIngredientResponse { outcome }))
        .map_err(ingredient_error)
}
