//! Parsed and scaled ingredient model

use serde::{Deserialize, Serialize};

use crate::{convert::UnitTable, format::format_kitchen_quantity_with};

/// An ingredient parsed from a recipe line
///
/// The quantity is always positive and finite. A line that would produce
/// anything else is not turned into an ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Numeric quantity, `> 0`
    pub quantity: f64,
    /// Canonical unit name, singular or plural for the quantity.
    ///
    /// Empty for count items like `3 eggs`.
    pub unit: String,
    /// Trimmed and capitalized name
    pub name: String,
    /// Quantity text as it was in the line
    pub raw_qty: String,
}

impl Ingredient {
    /// Check if it's a count item, without unit
    pub fn is_count(&self) -> bool {
        self.unit.is_empty()
    }
}

/// An [`Ingredient`] with its scaled quantity
///
/// Created by [`scale_ingredients`](crate::scale::scale_ingredients), the
/// original ingredient is kept untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    /// `quantity * desired / original`
    pub scaled_qty: f64,
    /// Unit name for the scaled quantity
    pub scaled_unit: String,
}

impl ScaledIngredient {
    /// Kitchen friendly quantity and unit, like `½ cup`
    ///
    /// See [`format_kitchen_quantity`](crate::format::format_kitchen_quantity).
    pub fn display(&self, units: &UnitTable) -> String {
        format_kitchen_quantity_with(units, self.scaled_qty, &self.scaled_unit)
    }
}

impl std::ops::Deref for ScaledIngredient {
    type Target = Ingredient;

    fn deref(&self) -> &Self::Target {
        &self.ingredient
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_qty)?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        write!(f, " {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(quantity: f64, unit: &str, name: &str, raw_qty: &str) -> Ingredient {
        Ingredient {
            quantity,
            unit: unit.into(),
            name: name.into(),
            raw_qty: raw_qty.into(),
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            ingredient(2.5, "cups", "Flour", "2 1/2").to_string(),
            "2 1/2 cups Flour"
        );
        assert_eq!(ingredient(3.0, "", "Eggs", "3").to_string(), "3 Eggs");
    }
}
