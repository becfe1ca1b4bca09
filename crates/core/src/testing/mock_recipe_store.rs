//! Mock recipe store for testing.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::documents::{new_id, StoreError};
use crate::recipe::{Recipe, RecipeStore};

/// How the mock hands out ingredient ids on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdAssignment {
    /// Keep existing ids, assign only missing ones (like the SQLite store).
    #[default]
    Preserve,
    /// Give every embedded ingredient a fresh id on each save.
    RekeyAll,
}

/// In-memory implementation of the RecipeStore trait.
///
/// Provides controllable behavior for testing:
/// - Record every saved recipe for assertions
/// - Simulate a failing save
/// - Simulate a store that re-keys embedded ingredients
#[derive(Debug, Default)]
pub struct MockRecipeStore {
    recipes: Mutex<HashMap<String, Recipe>>,
    saves: Mutex<Vec<Recipe>>,
    /// If set, the next save will fail with this error.
    next_error: Mutex<Option<StoreError>>,
    id_assignment: Mutex<IdAssignment>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockRecipeStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a recipe in the store directly, without recording a save.
    pub fn insert(&self, mut recipe: Recipe) -> Recipe {
        recipe.assign_ids();
        lock(&self.recipes).insert(recipe.id.clone(), recipe.clone());
        recipe
    }

    /// Get the current stored state of a recipe.
    pub fn get(&self, id: &str) -> Option<Recipe> {
        lock(&self.recipes).get(id).cloned()
    }

    /// Every recipe passed to `save`, in call order, as persisted.
    pub fn recorded_saves(&self) -> Vec<Recipe> {
        lock(&self.saves).clone()
    }

    /// Get the number of saves performed.
    pub fn save_count(&self) -> usize {
        lock(&self.saves).len()
    }

    /// Configure the next save to fail with the given error.
    pub fn set_next_error(&self, error: StoreError) {
        *lock(&self.next_error) = Some(error);
    }

    /// Choose how ingredient ids are assigned on save.
    pub fn set_id_assignment(&self, mode: IdAssignment) {
        *lock(&self.id_assignment) = mode;
    }
}

impl RecipeStore for MockRecipeStore {
    fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self.get(id))
    }

    fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        if let Some(error) = lock(&self.next_error).take() {
            return Err(error);
        }

        if *lock(&self.id_assignment) == IdAssignment::RekeyAll {
            for ingredient in &mut recipe.ingredients {
                ingredient.id = new_id();
            }
        }
        recipe.assign_ids();
        recipe.updated_at = Some(Utc::now());

        lock(&self.recipes).insert(recipe.id.clone(), recipe.clone());
        lock(&self.saves).push(recipe.clone());
        Ok(recipe)
    }

    fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut recipes: Vec<Recipe> = lock(&self.recipes).values().cloned().collect();
        recipes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        Ok(recipes)
    }
}
