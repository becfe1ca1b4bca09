//! Pure conversions between commands and stored entities.

use super::{IngredientCommand, UnitOfMeasureCommand};
use crate::recipe::Ingredient;
use crate::uom::UnitOfMeasure;

pub fn uom_to_command(uom: &UnitOfMeasure) -> UnitOfMeasureCommand {
    UnitOfMeasureCommand {
        id: uom.id.clone(),
        description: uom.description.clone(),
    }
}

pub fn command_to_uom(command: &UnitOfMeasureCommand) -> UnitOfMeasure {
    UnitOfMeasure {
        id: command.id.clone(),
        description: command.description.clone(),
    }
}

/// Convert a stored ingredient to its command form.
///
/// `recipe_id` comes from the back-reference and is empty when unset.
pub fn ingredient_to_command(ingredient: &Ingredient) -> IngredientCommand {
    IngredientCommand {
        id: ingredient.id.clone(),
        recipe_id: ingredient.recipe_id.clone().unwrap_or_default(),
        description: ingredient.description.clone(),
        amount: ingredient.amount,
        uom: uom_to_command(&ingredient.uom),
    }
}

/// Build a detached ingredient from a command.
///
/// The back-reference is left unset; adding the ingredient to a recipe sets it.
pub fn command_to_ingredient(command: &IngredientCommand) -> Ingredient {
    Ingredient {
        id: command.id.clone(),
        description: command.description.clone(),
        amount: command.amount,
        uom: command_to_uom(&command.uom),
        recipe_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_to_command_copies_back_reference() {
        let mut ingredient =
            Ingredient::new("flour", 2.0, UnitOfMeasure::new("u1", "Cup")).with_id("i1");
        ingredient.recipe_id = Some("r1".to_string());

        let command = ingredient_to_command(&ingredient);

        assert_eq!(command.id, "i1");
        assert_eq!(command.recipe_id, "r1");
        assert_eq!(command.uom.description, "Cup");
    }

    #[test]
    fn test_ingredient_to_command_without_owner() {
        let ingredient = Ingredient::new("flour", 2.0, UnitOfMeasure::new("u1", "Cup"));
        assert_eq!(ingredient_to_command(&ingredient).recipe_id, "");
    }

    #[test]
    fn test_command_to_ingredient_is_detached() {
        let command = IngredientCommand::new("r1", "sugar", 0.25, "u2").with_id("i9");
        let ingredient = command_to_ingredient(&command);

        assert_eq!(ingredient.id, "i9");
        assert_eq!(ingredient.description, "sugar");
        assert_eq!(ingredient.uom.id, "u2");
        assert!(ingredient.recipe_id.is_none());
    }
}
