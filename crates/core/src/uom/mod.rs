//! Units of measure.
//!
//! Independent reference data: ingredients point at a unit but never own it.

mod seed;
mod sqlite;

pub use seed::{seed_units_of_measure, DEFAULT_UNITS};
pub use sqlite::SqliteUnitOfMeasureStore;

use serde::{Deserialize, Serialize};

use crate::documents::StoreError;

/// A unit of measure such as "Cup" or "Teaspoon".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    /// Store-assigned identifier (empty until first saved).
    #[serde(default)]
    pub id: String,
    pub description: String,
}

impl UnitOfMeasure {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Trait for unit of measure storage backends.
pub trait UnitOfMeasureStore: Send + Sync {
    /// Get a unit by ID.
    fn find_by_id(&self, id: &str) -> Result<Option<UnitOfMeasure>, StoreError>;

    /// Insert or overwrite a unit, assigning an id if it has none.
    fn save(&self, uom: UnitOfMeasure) -> Result<UnitOfMeasure, StoreError>;

    /// List all units, sorted by description.
    fn list(&self) -> Result<Vec<UnitOfMeasure>, StoreError>;
}
