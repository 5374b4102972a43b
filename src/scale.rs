//! Support for recipe scaling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    convert::UnitTable,
    model::{Ingredient, ScaledIngredient},
};

/// Validated yield ratio
///
/// Scaling itself does not validate the yields, this is for the callers that
/// take them from user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    original: f64,
    desired: f64,
}

impl ScaleFactor {
    /// Creates a new [`ScaleFactor`]
    ///
    /// Both yields must be finite and greater than zero.
    pub fn new(original: f64, desired: f64) -> Result<Self, ScaleError> {
        for value in [original, desired] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScaleError::InvalidYield { value });
            }
        }
        Ok(Self { original, desired })
    }

    pub fn original(&self) -> f64 {
        self.original
    }

    pub fn desired(&self) -> f64 {
        self.desired
    }

    /// `desired / original`
    pub fn factor(&self) -> f64 {
        self.desired / self.original
    }
}

/// Possible errors validating yields
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Invalid yield, it must be a finite number greater than zero: {value}")]
    InvalidYield { value: f64 },
}

impl Ingredient {
    /// Scale the ingredient by a factor
    ///
    /// The unit name is re-pluralized for the new quantity.
    pub fn scale(&self, factor: f64, units: &UnitTable) -> ScaledIngredient {
        let scaled_qty = self.quantity * factor;
        let scaled_unit = units
            .canonical_name(&self.unit, scaled_qty)
            .unwrap_or(&self.unit)
            .to_string();
        ScaledIngredient {
            ingredient: self.clone(),
            scaled_qty,
            scaled_unit,
        }
    }
}

/// Scale all the ingredients by `desired_yield / original_yield`
///
/// Yields are expected to be validated, see [`ScaleFactor`]. Every
/// ingredient is scaled on its own and keeps its position.
#[tracing::instrument(level = "debug", skip(ingredients, units), fields(len = ingredients.len()))]
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    original_yield: f64,
    desired_yield: f64,
    units: &UnitTable,
) -> Vec<ScaledIngredient> {
    let factor = desired_yield / original_yield;
    ingredients.iter().map(|i| i.scale(factor, units)).collect()
}

#[cfg(all(test, feature = "bundled_units"))]
mod tests {
    use super::*;
    use crate::convert::default_units;

    fn ingredient(quantity: f64, unit: &str, name: &str) -> Ingredient {
        Ingredient {
            quantity,
            unit: unit.to_string(),
            name: name.to_string(),
            raw_qty: quantity.to_string(),
        }
    }

    #[test]
    fn factor_validation() {
        assert_eq!(ScaleFactor::new(4.0, 6.0).unwrap().factor(), 1.5);
        assert!(ScaleFactor::new(0.0, 6.0).is_err());
        assert!(ScaleFactor::new(4.0, -1.0).is_err());
        assert!(ScaleFactor::new(f64::INFINITY, 1.0).is_err());
        assert!(ScaleFactor::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn repluralize() {
        let list = [
            ingredient(2.0, "cups", "Flour"),
            ingredient(1.0, "teaspoon", "Salt"),
            ingredient(3.0, "", "Eggs"),
        ];
        let scaled = scale_ingredients(&list, 4.0, 2.0, default_units());
        assert_eq!(scaled[0].scaled_qty, 1.0);
        assert_eq!(scaled[0].scaled_unit, "cup");
        assert_eq!(scaled[1].scaled_qty, 0.5);
        assert_eq!(scaled[1].scaled_unit, "teaspoons");
        assert_eq!(scaled[2].scaled_unit, "");
        // the originals are kept
        assert_eq!(scaled[0].quantity, 2.0);
        assert_eq!(scaled[0].unit, "cups");
    }

    #[test]
    fn exact_arithmetic() {
        let list = [ingredient(0.1, "cups", "Milk")];
        let scaled = scale_ingredients(&list, 1.0, 3.0, default_units());
        assert_eq!(scaled[0].scaled_qty, 0.1 * (3.0 / 1.0));
    }
}
