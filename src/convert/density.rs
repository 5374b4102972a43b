//! Ingredient densities and weight/volume conversion
//!
//! Densities are grams per milliliter. The built-in table is a constant, the
//! custom one belongs to the user and is persisted by the application as a
//! plain JSON object:
//!
//! ```json
//! { "flour": 0.55, "oat milk": 1.03 }
//! ```
//!
//! Both are merged every time a conversion needs a density, built-in first,
//! so a custom entry always wins.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{convert_f64, default_units, UnitClass, UnitTable};

/// Density used when an ingredient is unknown
pub const WATER_DENSITY: f64 = 1.0;

/// Built-in densities, in g/ml. Keys are lowercase.
pub const BUILT_IN_DENSITIES: &[(&str, f64)] = &[
    ("water", 1.0),
    // flours and starches
    ("flour", 0.528),
    ("all-purpose flour", 0.528),
    ("plain flour", 0.528),
    ("bread flour", 0.537),
    ("cake flour", 0.482),
    ("whole wheat flour", 0.507),
    ("almond flour", 0.406),
    ("coconut flour", 0.473),
    ("cornstarch", 0.541),
    ("cocoa powder", 0.364),
    ("rolled oats", 0.338),
    ("rice", 0.85),
    // sugars and syrups
    ("sugar", 0.845),
    ("granulated sugar", 0.845),
    ("white sugar", 0.845),
    ("brown sugar", 0.93),
    ("powdered sugar", 0.507),
    ("icing sugar", 0.507),
    ("honey", 1.437),
    ("maple syrup", 1.331),
    ("molasses", 1.42),
    // dairy
    ("milk", 1.035),
    ("whole milk", 1.035),
    ("buttermilk", 1.03),
    ("heavy cream", 1.006),
    ("sour cream", 1.023),
    ("yogurt", 1.03),
    ("cream cheese", 0.981),
    ("butter", 0.959),
    ("unsalted butter", 0.959),
    // fats
    ("oil", 0.92),
    ("vegetable oil", 0.921),
    ("olive oil", 0.913),
    ("coconut oil", 0.921),
    ("peanut butter", 1.09),
    // leavening and seasoning
    ("salt", 1.217),
    ("table salt", 1.217),
    ("kosher salt", 0.6),
    ("baking soda", 0.93),
    ("baking powder", 0.9),
    ("vanilla extract", 0.879),
    ("vanilla", 0.879),
];

/// Merged densities, keyed by lowercase ingredient name
#[derive(Debug, Clone, PartialEq)]
pub struct DensityTable(IndexMap<String, f64>);

impl DensityTable {
    /// Only the built-in densities
    pub fn built_in() -> Self {
        Self(
            BUILT_IN_DENSITIES
                .iter()
                .map(|&(name, d)| (name.to_string(), d))
                .collect(),
        )
    }

    /// Built-in densities shadowed by the custom ones
    pub fn merged(custom: &CustomDensities) -> Self {
        let mut table = Self::built_in();
        for (name, &d) in custom.iter() {
            table.0.insert(name.to_string(), d);
        }
        table
    }

    /// Density of an ingredient, if known
    pub fn density(&self, ingredient: &str) -> Option<f64> {
        self.0.get(&ingredient.trim().to_lowercase()).copied()
    }

    /// Density of an ingredient or [`WATER_DENSITY`]
    pub fn density_or_water(&self, ingredient: &str) -> f64 {
        self.density(ingredient).unwrap_or(WATER_DENSITY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// User defined densities
///
/// Keys are stored lowercase. Only positive finite densities are accepted,
/// invalid entries are skipped when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, f64>")]
pub struct CustomDensities(IndexMap<String, f64>);

impl CustomDensities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the JSON exchange format
    pub fn from_json(json: &str) -> Result<Self, DensityError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Dump to the JSON exchange format
    pub fn to_json(&self) -> Result<String, DensityError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Add or replace a density
    ///
    /// Returns `false` and does nothing if the density is not a positive
    /// finite number.
    pub fn insert(&mut self, ingredient: &str, density: f64) -> bool {
        if !density.is_finite() || density <= 0.0 {
            tracing::warn!(ingredient, density, "ignoring invalid custom density");
            return false;
        }
        self.0.insert(ingredient.trim().to_lowercase(), density);
        true
    }

    pub fn remove(&mut self, ingredient: &str) -> Option<f64> {
        self.0.shift_remove(&ingredient.trim().to_lowercase())
    }

    pub fn get(&self, ingredient: &str) -> Option<f64> {
        self.0.get(&ingredient.trim().to_lowercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, f64>> for CustomDensities {
    fn from(value: IndexMap<String, f64>) -> Self {
        value.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for CustomDensities {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut custom = Self::new();
        for (name, d) in iter {
            custom.insert(name.as_ref(), d);
        }
        custom
    }
}

/// Errors loading custom densities
#[derive(Debug, Error)]
pub enum DensityError {
    #[error("Invalid densities JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl UnitTable {
    /// Convert a value between any two units, using the ingredient density
    /// to go between weight and volume.
    ///
    /// This never fails:
    /// - An unknown unit returns the value unchanged.
    /// - An unknown ingredient uses [`WATER_DENSITY`].
    /// - Count units only convert to count units, otherwise the value is
    ///   returned unchanged.
    #[tracing::instrument(level = "trace", skip(self, densities), ret)]
    pub fn convert_with_density(
        &self,
        value: f64,
        from: &str,
        to: &str,
        ingredient: &str,
        densities: &DensityTable,
    ) -> f64 {
        let (Some(from), Some(to)) = (self.find_unit(from), self.find_unit(to)) else {
            tracing::debug!(from, to, "unknown unit, value not converted");
            return value;
        };

        if from.class == to.class {
            return convert_f64(value, from, to);
        }

        let base = value * from.to_base;
        let converted = match (from.class, to.class) {
            (UnitClass::Weight, UnitClass::Volume) => base / densities.density_or_water(ingredient),
            (UnitClass::Volume, UnitClass::Weight) => base * densities.density_or_water(ingredient),
            _ => {
                tracing::debug!(%from, %to, "count units don't convert");
                return value;
            }
        };
        converted / to.to_base
    }
}

/// Convert with the [default units](default_units), merging the built-in
/// densities with `custom` for this call.
///
/// ```
/// # use cookscale::convert::{convert_with_density, CustomDensities};
/// let g = convert_with_density(236.59, "ml", "g", "water", &CustomDensities::new());
/// assert!((g - 236.59).abs() < 1e-9);
/// ```
pub fn convert_with_density(
    value: f64,
    from: &str,
    to: &str,
    ingredient: &str,
    custom: &CustomDensities,
) -> f64 {
    let densities = DensityTable::merged(custom);
    default_units().convert_with_density(value, from, to, ingredient, &densities)
}
