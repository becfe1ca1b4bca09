//! Recipe storage trait.

use crate::documents::StoreError;
use crate::recipe::Recipe;

/// Trait for recipe storage backends.
pub trait RecipeStore: Send + Sync {
    /// Get a recipe by ID.
    fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// Persist the whole recipe document, embedded ingredients included.
    ///
    /// The recipe and any ingredient with an empty id are given fresh ids;
    /// existing ids are kept. Returns the state as persisted.
    fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    /// List all recipes, most recently updated first.
    fn list(&self) -> Result<Vec<Recipe>, StoreError>;
}
