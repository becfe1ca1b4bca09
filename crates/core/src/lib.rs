pub mod command;
pub mod config;
pub mod documents;
pub mod ingredient;
pub mod recipe;
pub mod testing;
pub mod uom;

pub use command::{IngredientCommand, UnitOfMeasureCommand};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    SeedConfig, ServerConfig,
};
pub use documents::StoreError;
pub use ingredient::{DeleteOutcome, IngredientError, IngredientService};
pub use recipe::{Ingredient, Recipe, RecipeStore, SqliteRecipeStore};
pub use uom::{
    seed_units_of_measure, SqliteUnitOfMeasureStore, UnitOfMeasure, UnitOfMeasureStore,
    DEFAULT_UNITS,
};
