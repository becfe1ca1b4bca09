use thiserror::Error;

use crate::documents::StoreError;

/// Errors for ingredient operations.
#[derive(Debug, Error)]
pub enum IngredientError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Ingredient {ingredient_id} not found in recipe {recipe_id}")]
    IngredientNotFound {
        recipe_id: String,
        ingredient_id: String,
    },

    #[error("Unit of measure not found: {0}")]
    UnitOfMeasureNotFound(String),

    #[error("Saved ingredient in recipe {recipe_id} is ambiguous: {matches} candidates match")]
    AmbiguousMatch { recipe_id: String, matches: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
