use axum::{extract::State, http::StatusCode, Json};
use recipebook_core::{Config, IngredientError, StoreError};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body shared by all handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

pub fn error_response(status: StatusCode, error: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

pub fn store_error(e: StoreError) -> ApiError {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
}

pub fn ingredient_error(e: IngredientError) -> ApiError {
    let status = match &e {
        IngredientError::RecipeNotFound(_) | IngredientError::IngredientNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        IngredientError::UnitOfMeasureNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IngredientError::AmbiguousMatch { .. } => StatusCode::CONFLICT,
        IngredientError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, e)
}
