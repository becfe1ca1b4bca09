use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, ingredients, recipes, uoms};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Units of measure
        .route("/uoms", get(uoms::list_uoms))
        // Recipes
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route("/recipes/{recipe_id}", get(recipes::get_recipe))
        // Ingredients
        .route(
            "/recipes/{recipe_id}/ingredients",
            get(ingredients::list_ingredients).post(ingredients::upsert_ingredient),
        )
        .route(
            "/recipes/{recipe_id}/ingredients/{id}",
            get(ingredients::get_ingredient).delete(ingredients::delete_ingredient),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}

