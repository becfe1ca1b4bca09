//! Default reference data.

use tracing::{debug, info};

use super::{UnitOfMeasure, UnitOfMeasureStore};
use crate::documents::StoreError;

/// Units inserted into an empty store at startup.
pub const DEFAULT_UNITS: [&str; 8] = [
    "Teaspoon",
    "Tablespoon",
    "Cup",
    "Pinch",
    "Ounce",
    "Each",
    "Dash",
    "Pint",
];

/// Insert the default units unless the store already holds some.
///
/// Returns the number of units inserted.
pub fn seed_units_of_measure(store: &dyn UnitOfMeasureStore) -> Result<usize, StoreError> {
    let existing = store.list()?;
    if !existing.is_empty() {
        debug!(count = existing.len(), "Units of measure already present, skipping seed");
        return Ok(0);
    }

    for description in DEFAULT_UNITS {
        store.save(UnitOfMeasure::new("", description))?;
    }

    info!(count = DEFAULT_UNITS.len(), "Seeded default units of measure");
    Ok(DEFAULT_UNITS.len())
}
