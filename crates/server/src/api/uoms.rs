//! Unit of measure API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use recipebook_core::command::uom_to_command;
use recipebook_core::UnitOfMeasureCommand;

use super::handlers::{store_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UomListResponse {
    pub uoms: Vec<UnitOfMeasureCommand>,
    pub total: usize,
}

/// GET /api/v1/uoms
///
/// List all units of measure, sorted by description.
pub async fn list_uoms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UomListResponse>, ApiError> {
    let units = state.units().list().map_err(store_error)?;
    let uoms: Vec<UnitOfMeasureCommand> = units.iter().map(uom_to_command).collect();
    let total = uoms.len();
    Ok(Json(UomListResponse { uoms, total }))
}
