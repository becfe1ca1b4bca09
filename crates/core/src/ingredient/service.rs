//! Find, upsert and delete ingredients embedded in recipes.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};

use super::IngredientError;
use crate::command::{command_to_ingredient, ingredient_to_command, IngredientCommand};
use crate::recipe::{Ingredient, Recipe, RecipeStore};
use crate::uom::{UnitOfMeasure, UnitOfMeasureStore};

/// What a delete call did. Absence is reported, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The ingredient was removed and the recipe saved.
    Deleted,
    /// No recipe with that id; nothing was saved.
    RecipeNotFound,
    /// The recipe has no such ingredient; nothing was saved.
    IngredientNotFound,
}

/// Ingredient operations over a recipe store and a unit of measure store.
#[derive(Clone)]
pub struct IngredientService {
    recipes: Arc<dyn RecipeStore>,
    units: Arc<dyn UnitOfMeasureStore>,
}

impl IngredientService {
    pub fn new(recipes: Arc<dyn RecipeStore>, units: Arc<dyn UnitOfMeasureStore>) -> Self {
        Self { recipes, units }
    }

    /// Look up one ingredient of a recipe.
    pub fn find_by_recipe_and_ingredient_id(
        &self,
        recipe_id: &str,
        ingredient_id: &str,
    ) -> Result<IngredientCommand, IngredientError> {
        let recipe = self.load_recipe(recipe_id)?;

        recipe
            .ingredient(ingredient_id)
            .map(ingredient_to_command)
            .ok_or_else(|| {
                error!(recipe_id, ingredient_id, "Ingredient not found");
                IngredientError::IngredientNotFound {
                    recipe_id: recipe_id.to_string(),
                    ingredient_id: ingredient_id.to_string(),
                }
            })
    }

    /// All ingredients of a recipe, in stored order.
    pub fn list_ingredients(
        &self,
        recipe_id: &str,
    ) -> Result<Vec<IngredientCommand>, IngredientError> {
        let recipe = self.load_recipe(recipe_id)?;
        Ok(recipe.ingredients.iter().map(ingredient_to_command).collect())
    }

    /// Update the ingredient matching `command.id`, or add a new one.
    ///
    /// The owning recipe is saved once, as a whole. The returned command
    /// describes the ingredient as persisted, including any id the store
    /// assigned.
    pub fn upsert_ingredient(
        &self,
        command: &IngredientCommand,
    ) -> Result<IngredientCommand, IngredientError> {
        let mut recipe = self.load_recipe(&command.recipe_id)?;
        let uom = self.resolve_uom(&command.uom.id)?;

        match recipe.ingredient_mut(&command.id) {
            Some(existing) => {
                debug!(
                    recipe_id = %command.recipe_id,
                    ingredient_id = %command.id,
                    "Updating ingredient"
                );
                existing.description = command.description.clone();
                existing.amount = command.amount;
                existing.uom = uom;
            }
            None => {
                debug!(recipe_id = %command.recipe_id, "Adding ingredient");
                let mut ingredient = command_to_ingredient(command);
                ingredient.uom = uom;
                recipe.add_ingredient(ingredient);
            }
        }

        let known_ids: HashSet<String> = recipe
            .ingredients
            .iter()
            .filter(|i| !i.id.is_empty())
            .map(|i| i.id.clone())
            .collect();

        let saved = self.recipes.save(recipe)?;
        let ingredient = locate_saved_ingredient(&saved, command, &known_ids)?;

        Ok(ingredient_to_command(ingredient))
    }

    /// Remove an ingredient from its recipe.
    ///
    /// Missing recipes and ingredients are reported through the outcome; only
    /// store failures are errors, so repeating a delete is harmless.
    pub fn delete_ingredient_by_id(
        &self,
        recipe_id: &str,
        ingredient_id: &str,
    ) -> Result<DeleteOutcome, IngredientError> {
        debug!(recipe_id, ingredient_id, "Deleting ingredient");

        let Some(mut recipe) = self.recipes.find_by_id(recipe_id)? else {
            debug!(recipe_id, "Recipe not found, nothing to delete");
            return Ok(DeleteOutcome::RecipeNotFound);
        };
        debug!(recipe_id, "Found recipe");

        if recipe.remove_ingredient(ingredient_id).is_none() {
            return Ok(DeleteOutcome::IngredientNotFound);
        }
        debug!(recipe_id, ingredient_id, "Found ingredient");

        self.recipes.save(recipe)?;
        Ok(DeleteOutcome::Deleted)
    }

    fn load_recipe(&self, recipe_id: &str) -> Result<Recipe, IngredientError> {
        self.recipes.find_by_id(recipe_id)?.ok_or_else(|| {
            error!(recipe_id, "Recipe not found");
            IngredientError::RecipeNotFound(recipe_id.to_string())
        })
    }

    fn resolve_uom(&self, uom_id: &str) -> Result<UnitOfMeasure, IngredientError> {
        self.units.find_by_id(uom_id)?.ok_or_else(|| {
            error!(uom_id, "Unit of measure not found");
            IngredientError::UnitOfMeasureNotFound(uom_id.to_string())
        })
    }
}

/// Find the upserted ingredient in the recipe as the store returned it.
///
/// Tried in order: the command's own id, the single ingredient whose id this
/// save assigned, then a match on description, amount and unit. The last step
/// is a guess and refuses to pick between several candidates.
fn locate_saved_ingredient<'a>(
    saved: &'a Recipe,
    command: &IngredientCommand,
    known_ids: &HashSet<String>,
) -> Result<&'a Ingredient, IngredientError> {
    if let Some(found) = saved.ingredient(&command.id) {
        return Ok(found);
    }

    let assigned: Vec<&Ingredient> = saved
        .ingredients
        .iter()
        .filter(|i| !known_ids.contains(&i.id))
        .collect();
    if let [only] = assigned.as_slice() {
        return Ok(*only);
    }

    warn!(
        recipe_id = %saved.id,
        newly_assigned = assigned.len(),
        "Could not identify saved ingredient by id, matching on description, amount and unit"
    );

    let matches: Vec<&Ingredient> = saved
        .ingredients
        .iter()
        .filter(|i| {
            i.description == command.description
                && i.amount == command.amount
                && i.uom.id == command.uom.id
        })
        .collect();

    match matches.as_slice() {
        [only] => Ok(*only),
        [] => {
            error!(recipe_id = %saved.id, "Saved ingredient not found");
            Err(IngredientError::IngredientNotFound {
                recipe_id: saved.id.clone(),
                ingredient_id: command.id.clone(),
            })
        }
        _ => Err(IngredientError::AmbiguousMatch {
            recipe_id: saved.id.clone(),
            matches: matches.len(),
        }),
    }
}
