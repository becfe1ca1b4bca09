//! Mock unit of measure store for testing.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::documents::{assign_if_empty, StoreError};
use crate::uom::{UnitOfMeasure, UnitOfMeasureStore};

/// In-memory implementation of the UnitOfMeasureStore trait.
#[derive(Debug, Default)]
pub struct MockUnitOfMeasureStore {
    units: Mutex<HashMap<String, UnitOfMeasure>>,
}

impl MockUnitOfMeasureStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store holding `units`.
    pub fn with_units(units: Vec<UnitOfMeasure>) -> Self {
        let units = units.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            units: Mutex::new(units),
        }
    }
}

impl UnitOfMeasureStore for MockUnitOfMeasureStore {
    fn find_by_id(&self, id: &str) -> Result<Option<UnitOfMeasure>, StoreError> {
        let units = self.units.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(units.get(id).cloned())
    }

    fn save(&self, mut uom: UnitOfMeasure) -> Result<UnitOfMeasure, StoreError> {
        assign_if_empty(&mut uom.id);
        let mut units = self.units.lock().unwrap_or_else(PoisonError::into_inner);
        units.insert(uom.id.clone(), uom.clone());
        Ok(uom)
    }

    fn list(&self) -> Result<Vec<UnitOfMeasure>, StoreError> {
        let units = self.units.lock().unwrap_or_else(PoisonError::into_inner);
        let mut list: Vec<UnitOfMeasure> = units.values().cloned().collect();
        list.sort_by(|a, b| a.description.cmp(&b.description));
        Ok(list)
    }
}
