//! SQLite-backed recipe store.

use std::path::Path;

use chrono::Utc;
use tracing::debug;

use super::{Recipe, RecipeStore};
use crate::documents::{DocumentTable, StoreError};

const TABLE: &str = "recipes";

/// SQLite-backed recipe store. Each recipe is one JSON document.
pub struct SqliteRecipeStore {
    documents: DocumentTable,
}

impl SqliteRecipeStore {
    /// Create a new SQLite recipe store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            documents: DocumentTable::open(path, TABLE)?,
        })
    }

    /// Create an in-memory SQLite recipe store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            documents: DocumentTable::in_memory(TABLE)?,
        })
    }
}

impl RecipeStore for SqliteRecipeStore {
    fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        self.documents.load(id)
    }

    fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let assigned = recipe.assign_ids();
        let now = Utc::now();
        recipe.updated_at = Some(now);

        self.documents.upsert(&recipe.id, &recipe, now)?;
        debug!(
            recipe_id = %recipe.id,
            ingredients = recipe.ingredients.len(),
            assigned,
            "Saved recipe"
        );

        Ok(recipe)
    }

    fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        self.documents.load_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;
    use crate::uom::UnitOfMeasure;

    fn create_test_store() -> SqliteRecipeStore {
        SqliteRecipeStore::in_memory().unwrap()
    }

    fn teaspoon() -> UnitOfMeasure {
        UnitOfMeasure::new("uom-tsp", "Teaspoon")
    }

    #[test]
    fn test_find_missing_recipe() {
        let store = create_test_store();
        assert!(store.find_by_id("nope").unwrap().is_none());
    }

    #[test]
    fn test_save_assigns_ids() {
        let store = create_test_store();
        let mut recipe = Recipe::new("Tacos");
        recipe.add_ingredient(Ingredient::new("salt", 1.0, teaspoon()));

        let saved = store.save(recipe).unwrap();

        assert!(!saved.id.is_empty());
        assert!(saved.updated_at.is_some());
        assert!(!saved.ingredients[0].id.is_empty());
        assert_eq!(saved.ingredients[0].recipe_id.as_deref(), Some(saved.id.as_str()));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = create_test_store();
        let mut recipe = Recipe::new("Chili");
        recipe.add_ingredient(Ingredient::new("cumin", 0.5, teaspoon()));
        let saved = store.save(recipe).unwrap();

        let loaded = store.find_by_id(&saved.id).unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_amount_survives_storage_exactly() {
        let store = create_test_store();
        let amount = 1175.4621790330661;
        let mut recipe = Recipe::new("Bread");
        recipe.add_ingredient(Ingredient::new("flour", amount, teaspoon()));
        let saved = store.save(recipe).unwrap();

        let loaded = store.find_by_id(&saved.id).unwrap().unwrap();
        assert_eq!(loaded.ingredients[0].amount.to_bits(), amount.to_bits());
    }

    #[test]
    fn test_save_keeps_existing_ids() {
        let store = create_test_store();
        let mut recipe = Recipe::new("Chili");
        recipe.add_ingredient(Ingredient::new("cumin", 0.5, teaspoon()).with_id("cumin-1"));
        let saved = store.save(recipe).unwrap();
        let resaved = store.save(saved.clone()).unwrap();

        assert_eq!(resaved.id, saved.id);
        assert_eq!(resaved.ingredients[0].id, "cumin-1");
    }

    #[test]
    fn test_save_rewrites_whole_document() {
        let store = create_test_store();
        let mut recipe = Recipe::new("Chili");
        recipe.add_ingredient(Ingredient::new("cumin", 0.5, teaspoon()));
        recipe.add_ingredient(Ingredient::new("beans", 2.0, teaspoon()));
        let mut saved = store.save(recipe).unwrap();

        let cumin_id = saved.ingredients[0].id.clone();
        saved.remove_ingredient(&cumin_id);
        store.save(saved.clone()).unwrap();

        let loaded = store.find_by_id(&saved.id).unwrap().unwrap();
        assert_eq!(loaded.ingredients.len(), 1);
        assert_eq!(loaded.ingredients[0].description, "beans");
    }

    #[test]
    fn test_list_recipes() {
        let store = create_test_store();
        store.save(Recipe::new("One")).unwrap();
        store.save(Recipe::new("Two")).unwrap();

        let recipes = store.list().unwrap();
        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn test_file_backed_store_persists_across_instances() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("recipes.db");

        let id = {
            let store = SqliteRecipeStore::new(&path).unwrap();
            store.save(Recipe::new("Bread")).unwrap().id
        };

        let reopened = SqliteRecipeStore::new(&path).unwrap();
        let loaded = reopened.find_by_id(&id).unwrap().unwrap();
        assert_eq!(loaded.description, "Bread");
    }
}
