//! SQLite-backed unit of measure store.

use std::path::Path;

use chrono::Utc;

use super::{UnitOfMeasure, UnitOfMeasureStore};
use crate::documents::{assign_if_empty, DocumentTable, StoreError};

const TABLE: &str = "units_of_measure";

/// SQLite-backed unit of measure store.
pub struct SqliteUnitOfMeasureStore {
    documents: DocumentTable,
}

impl SqliteUnitOfMeasureStore {
    /// Create a new store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            documents: DocumentTable::open(path, TABLE)?,
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            documents: DocumentTable::in_memory(TABLE)?,
        })
    }
}

impl UnitOfMeasureStore for SqliteUnitOfMeasureStore {
    fn find_by_id(&self, id: &str) -> Result<Option<UnitOfMeasure>, StoreError> {
        self.documents.load(id)
    }

    fn save(&self, mut uom: UnitOfMeasure) -> Result<UnitOfMeasure, StoreError> {
        assign_if_empty(&mut uom.id);
        self.documents.upsert(&uom.id, &uom, Utc::now())?;
        Ok(uom)
    }

    fn list(&self) -> Result<Vec<UnitOfMeasure>, StoreError> {
        let mut units: Vec<UnitOfMeasure> = self.documents.load_all()?;
        units.sort_by(|a, b| a.description.cmp(&b.description));
        Ok(units)
    }
}
