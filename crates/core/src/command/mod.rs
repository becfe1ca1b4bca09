//! Transport shapes for ingredients and units of measure.
//!
//! Commands mirror the stored entities and add the owning recipe id so a
//! single value carries everything a caller needs to address an ingredient.

mod convert;

pub use convert::{command_to_ingredient, command_to_uom, ingredient_to_command, uom_to_command};

use serde::{Deserialize, Serialize};

/// Unit of measure as seen by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasureCommand {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
}

/// Ingredient as seen by callers.
///
/// An empty `id` means "not yet persisted".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientCommand {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub recipe_id: String,
    pub description: String,
    pub amount: f64,
    pub uom: UnitOfMeasureCommand,
}

impl IngredientCommand {
    /// A command for a new ingredient on `recipe_id`.
    pub fn new(
        recipe_id: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        uom_id: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            recipe_id: recipe_id.into(),
            description: description.into(),
            amount,
            uom: UnitOfMeasureCommand {
                id: uom_id.into(),
                description: String::new(),
            },
        }
    }

    /// Builder-style ingredient id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
