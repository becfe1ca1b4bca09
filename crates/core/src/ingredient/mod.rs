//! Ingredient management on top of recipe documents.
//!
//! Every operation loads the owning recipe, works on its embedded ingredient
//! list and, when something changed, saves the recipe as a whole.

mod error;
mod service;

pub use error::IngredientError;
pub use service::{DeleteOutcome, IngredientService};
