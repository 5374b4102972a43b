//! Configuration data structures used in [`UnitTableBuilder`](super::UnitTableBuilder)

use serde::Deserialize;
use std::collections::HashMap;

use super::UnitClass;

/// Configuration struct for units used in [`UnitTableBuilder`](super::UnitTableBuilder)
///
/// This structure is designed for deserializing [TOML](https://toml.io/en/),
/// but you can try other formats supported by serde.
///
/// ```toml
/// [[units]]
/// name = "cup"
/// plural = "cups"
/// class = "volume"
/// to_base = 236.5882365
/// symbols = ["c"]
/// aliases = ["cup", "cups", "cp"]
///
/// [extend.cup]
/// aliases = ["tasse"]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct UnitsFile {
    /// Declare new units
    #[serde(default)]
    pub units: Vec<UnitEntry>,
    /// Add aliases to units declared in layers before
    ///
    /// The keys are any name, symbol or alias of the unit to extend.
    #[serde(default)]
    pub extend: HashMap<String, ExtendEntry>,
}

/// A new unit
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UnitEntry {
    /// Canonical singular name, like `teaspoon`
    pub name: String,
    /// Canonical plural name. Defaults to `name` + `s`.
    #[serde(default)]
    pub plural: Option<String>,
    /// Class of the unit
    pub class: UnitClass,
    /// How many base units (grams or milliliters) one of this unit is.
    ///
    /// Count units use `1`.
    #[serde(default = "one")]
    pub to_base: f64,
    /// Abbreviations. Matched exactly before any other lookup, so `T` and
    /// `t` can point to different units.
    #[serde(default)]
    pub symbols: Vec<String>,
    /// Other names to parse the unit from
    #[serde(default)]
    pub aliases: Vec<String>,
}

fn one() -> f64 {
    1.0
}

/// Extend a unit from other layers
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtendEntry {
    pub symbols: Vec<String>,
    pub aliases: Vec<String>,
}

impl UnitsFile {
    /// Get the bundled units file
    ///
    /// This is only available with the `bundled_units` feature.
    #[cfg(feature = "bundled_units")]
    pub fn bundled() -> Self {
        const TEXT: &str = include_str!("../../units.toml");
        toml::from_str(TEXT).expect("bundled units file is valid")
    }

    /// Parse a units file from TOML text
    #[cfg(feature = "bundled_units")]
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
