//! Recipe aggregates.
//!
//! A recipe is the unit of persistence: its ingredients are embedded in the
//! recipe document and have no storage of their own.

mod sqlite;
mod store;
mod types;

pub use sqlite::SqliteRecipeStore;
pub use store::RecipeStore;
pub use types::{Ingredient, Recipe};
