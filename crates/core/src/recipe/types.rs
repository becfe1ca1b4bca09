//! Types for recipes and their embedded ingredients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::documents::assign_if_empty;
use crate::uom::UnitOfMeasure;

/// A recipe document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier (empty until first saved).
    #[serde(default)]
    pub id: String,
    /// Free text description.
    pub description: String,
    /// Embedded ingredients. Order is not significant.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// When the recipe was last saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An ingredient embedded in a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Store-assigned identifier (empty until first saved).
    #[serde(default)]
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub uom: UnitOfMeasure,
    /// Owning recipe. Navigation only; the recipe owns the ingredient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
}

impl Recipe {
    /// Create an unsaved recipe with no ingredients.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            description: description.into(),
            ingredients: Vec::new(),
            updated_at: None,
        }
    }

    /// Find an embedded ingredient by id.
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        if id.is_empty() {
            return None;
        }
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Find an embedded ingredient by id for in-place mutation.
    pub fn ingredient_mut(&mut self, id: &str) -> Option<&mut Ingredient> {
        if id.is_empty() {
            return None;
        }
        self.ingredients.iter_mut().find(|i| i.id == id)
    }

    /// Append an ingredient, pointing its back-reference at this recipe.
    pub fn add_ingredient(&mut self, mut ingredient: Ingredient) {
        ingredient.recipe_id = Some(self.id.clone());
        self.ingredients.push(ingredient);
    }

    /// Detach an ingredient, clearing its back-reference.
    pub fn remove_ingredient(&mut self, id: &str) -> Option<Ingredient> {
        if id.is_empty() {
            return None;
        }
        let position = self.ingredients.iter().position(|i| i.id == id)?;
        let mut removed = self.ingredients.remove(position);
        removed.recipe_id = None;
        Some(removed)
    }

    /// Fill in missing ids and re-point every back-reference at this recipe.
    ///
    /// Returns the number of ingredients that received a new id.
    pub(crate) fn assign_ids(&mut self) -> usize {
        assign_if_empty(&mut self.id);
        let mut assigned = 0;
        for ingredient in &mut self.ingredients {
            if assign_if_empty(&mut ingredient.id) {
                assigned += 1;
            }
            ingredient.recipe_id = Some(self.id.clone());
        }
        assigned
    }
}

impl Ingredient {
    pub fn new(description: impl Into<String>, amount: f64, uom: UnitOfMeasure) -> Self {
        Self {
            id: String::new(),
            description: description.into(),
            amount,
            uom,
            recipe_id: None,
        }
    }

    /// Builder-style identifier, mostly for fixtures.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
