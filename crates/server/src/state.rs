use std::sync::Arc;

use recipebook_core::{Config, IngredientService, RecipeStore, UnitOfMeasureStore};

/// Shared application state
pub struct AppState {
    config: Config,
    recipes: Arc<dyn RecipeStore>,
    units: Arc<dyn UnitOfMeasureStore>,
    ingredients: IngredientService,
}

impl AppState {
    pub fn new(
        config: Config,
        recipes: Arc<dyn RecipeStore>,
        units: Arc<dyn UnitOfMeasureStore>,
    ) -> Self {
        let ingredients = IngredientService::new(Arc::clone(&recipes), Arc::clone(&units));
        Self {
            config,
            recipes,
            units,
            ingredients,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn recipes(&self) -> &dyn RecipeStore {
        self.recipes.as_ref()
    }

    pub fn units(&self) -> &dyn UnitOfMeasureStore {
        self.units.as_ref()
    }

    pub fn ingredients(&self) -> &IngredientService {
        &self.ingredients
    }
}
