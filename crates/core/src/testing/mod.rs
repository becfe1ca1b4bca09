//! Testing utilities and mock implementations.
//!
//! This module provides in-memory implementations of the store traits so the
//! ingredient service and the HTTP layer can be exercised without SQLite.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipebook_core::testing::{fixtures, IdAssignment, MockRecipeStore, MockUnitOfMeasureStore};
//!
//! let recipes = MockRecipeStore::new();
//! recipes.insert(fixtures::recipe("r1", vec![]));
//!
//! // Simulate a store that re-keys embedded documents on every save
//! recipes.set_id_assignment(IdAssignment::RekeyAll);
//!
//! let units = MockUnitOfMeasureStore::with_units(vec![fixtures::cup()]);
//! ```

mod mock_recipe_store;
mod mock_uom_store;

pub use mock_recipe_store::{IdAssignment, MockRecipeStore};
pub use mock_uom_store::MockUnitOfMeasureStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::recipe::{Ingredient, Recipe};
    use crate::uom::UnitOfMeasure;

    pub const CUP_ID: &str = "uom-cup";
    pub const TEASPOON_ID: &str = "uom-teaspoon";

    pub fn cup() -> UnitOfMeasure {
        UnitOfMeasure::new(CUP_ID, "Cup")
    }

    pub fn teaspoon() -> UnitOfMeasure {
        UnitOfMeasure::new(TEASPOON_ID, "Teaspoon")
    }

    /// Create a persisted-looking ingredient (id set, no owner yet).
    pub fn ingredient(id: &str, description: &str, amount: f64, uom: UnitOfMeasure) -> Ingredient {
        Ingredient::new(description, amount, uom).with_id(id)
    }

    /// Create a recipe with the given id owning `ingredients`.
    pub fn recipe(id: &str, ingredients: Vec<Ingredient>) -> Recipe {
        let mut recipe = Recipe::new(format!("Recipe {}", id));
        recipe.id = id.to_string();
        for ingredient in ingredients {
            recipe.add_ingredient(ingredient);
        }
        recipe
    }
}
