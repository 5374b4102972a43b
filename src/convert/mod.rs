//! Unit registry and conversions
//!
//! This includes:
//! - A layered configuration system for the known units
//! - Conversions inside a [`UnitClass`]
//! - Weight and volume conversions bridged by an ingredient [density]

use std::{collections::HashMap, sync::Arc};

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use builder::{UnitTableBuilder, UnitTableBuilderError};
pub use density::{convert_with_density, CustomDensities, DensityError, DensityTable};
pub use units_file::UnitsFile;

mod builder;
pub mod density;
pub mod units_file;

/// Registry of all the known units
///
/// This holds every alias of every unit, their [`UnitClass`] and how to
/// convert them to the base unit of the class.
///
/// To create one use [`UnitTable::builder`].
///
/// [`UnitTable::default`] changes with the feature `bundled_units`:
/// - When enabled, [`UnitTable::bundled`].
/// - When disabled, [`UnitTable::empty`].
#[derive(Debug, Clone)]
pub struct UnitTable {
    all_units: Vec<Arc<Unit>>,
    symbol_index: UnitIndex,
    alias_index: UnitIndex,
}

impl UnitTable {
    /// Start to create a new [`UnitTable`]
    pub fn builder() -> UnitTableBuilder {
        UnitTableBuilder::new()
    }

    /// Table with no units
    ///
    /// This is the default when the `bundled_units` feature is disabled.
    /// Every unit token is unknown, so only count patterns can match.
    pub fn empty() -> Self {
        Self {
            all_units: Default::default(),
            symbol_index: Default::default(),
            alias_index: Default::default(),
        }
    }

    /// Table with the bundled units
    ///
    /// These are the common kitchen units in English. This is only available
    /// when the `bundled_units` feature is enabled.
    ///
    /// Building a table takes time, if you only need to read it, use
    /// [`default_units`].
    #[cfg(feature = "bundled_units")]
    pub fn bundled() -> Self {
        UnitTableBuilder::new()
            .with_units_file(UnitsFile::bundled())
            .unwrap()
            .finish()
    }

    /// Get the total number of known units.
    ///
    /// This is **not** all the known aliases, just **different units**.
    pub fn unit_count(&self) -> usize {
        self.all_units.len()
    }

    /// Get an iterator of all the known units.
    pub fn all_units(&self) -> impl Iterator<Item = &Unit> {
        self.all_units.iter().map(|u| u.as_ref())
    }

    /// Units grouped by [`UnitClass`], in table order
    ///
    /// Handy to fill unit pickers in conversion UIs.
    pub fn units_by_class(&self) -> EnumMap<UnitClass, Vec<&Unit>> {
        let mut by_class: EnumMap<UnitClass, Vec<&Unit>> = EnumMap::default();
        for unit in self.all_units() {
            by_class[unit.class].push(unit);
        }
        by_class
    }

    /// Find a unit by any of it's names, symbols or aliases
    ///
    /// Lookup order:
    /// - exact symbol
    /// - case insensitive name or alias
    /// - the same two without a trailing `.`
    pub fn find_unit(&self, unit: &str) -> Option<&Arc<Unit>> {
        let unit = unit.trim();
        if unit.is_empty() {
            return None;
        }
        let lookup = |key: &str| {
            self.symbol_index
                .get_unit_id(key)
                .or_else(|| self.alias_index.get_unit_id(&key.to_lowercase()))
        };
        let id = lookup(unit).or_else(|| {
            let stripped = unit.strip_suffix('.')?;
            lookup(stripped.trim_end())
        })?;
        Some(&self.all_units[id])
    }

    /// Same as [`Self::find_unit`] but as a [`Result`]
    pub fn get_unit(&self, unit: &str) -> Result<&Arc<Unit>, UnknownUnit> {
        self.find_unit(unit)
            .ok_or_else(|| UnknownUnit(unit.to_string()))
    }

    /// Check if the text is any known name, symbol or alias
    pub fn is_alias(&self, unit: &str) -> bool {
        self.find_unit(unit).is_some()
    }

    /// Canonical name of a unit for a quantity. See [`Unit::name_for`].
    pub fn canonical_name(&self, unit: &str, quantity: f64) -> Option<&str> {
        self.find_unit(unit).map(|u| u.name_for(quantity))
    }

    /// Convert a value between two units of the same class
    ///
    /// Crossing classes needs a density, see [`convert_with_density`].
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        let from = self.get_unit(from)?;
        let to = self.get_unit(to)?;
        if from.class != to.class {
            return Err(ConvertError::MixedClasses {
                from: from.class,
                to: to.class,
            });
        }
        Ok(convert_f64(value, from, to))
    }
}

#[cfg(not(feature = "bundled_units"))]
impl Default for UnitTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "bundled_units")]
impl Default for UnitTable {
    fn default() -> Self {
        Self::bundled()
    }
}

impl PartialEq for UnitTable {
    fn eq(&self, other: &Self) -> bool {
        self.all_units == other.all_units
            && self.symbol_index == other.symbol_index
            && self.alias_index == other.alias_index
    }
}

/// Shared [`UnitTable::default`] instance
///
/// Built the first time it's used, then only read. This is the table the
/// free functions of this crate use and the one to hand to calculator and
/// conversion UIs.
pub fn default_units() -> &'static UnitTable {
    static UNITS: once_cell::sync::Lazy<UnitTable> = once_cell::sync::Lazy::new(UnitTable::default);
    &UNITS
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct UnitIndex(HashMap<Arc<str>, usize>);

impl UnitIndex {
    fn get_unit_id(&self, key: &str) -> Option<usize> {
        self.0.get(key).copied()
    }
}

/// A unit
///
/// Conversion to the base unit of the class is `val * [Self::to_base]`.
///
/// It implements [Display](std::fmt::Display). It will use the singular
/// name or, if alternate (`#`) is given, the plural.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Unit {
    /// Canonical singular name
    pub name: Arc<str>,
    /// Canonical plural name
    pub plural: Arc<str>,
    /// Case sensitive abbreviations
    pub symbols: Vec<Arc<str>>,
    /// Case insensitive aliases
    pub aliases: Vec<Arc<str>>,
    /// The [`UnitClass`] this unit belongs to
    pub class: UnitClass,
    /// Grams or milliliters in one of this unit
    pub to_base: f64,
}

impl Unit {
    /// Singular name when the quantity is exactly `1`, plural otherwise
    ///
    /// ```
    /// # use cookscale::convert::default_units;
    /// let cup = default_units().find_unit("c").unwrap();
    /// assert_eq!(cup.name_for(1.0), "cup");
    /// assert_eq!(cup.name_for(2.0), "cups");
    /// assert_eq!(cup.name_for(0.5), "cups");
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn name_for(&self, quantity: f64) -> &str {
        if quantity == 1.0 {
            &self.name
        } else {
            &self.plural
        }
    }

    /// If it converts, weight or volume
    pub fn is_measure(&self) -> bool {
        !matches!(self.class, UnitClass::Count)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.plural)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    enum_map::Enum,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum UnitClass {
    /// Base unit is the gram
    Weight,
    /// Base unit is the milliliter
    Volume,
    /// Informal count words, they don't convert
    Count,
}

pub(crate) fn convert_f64(value: f64, from: &Unit, to: &Unit) -> f64 {
    debug_assert_eq!(from.class, to.class);
    if std::ptr::eq(from, to) {
        return value;
    }
    value * from.to_base / to.to_base
}

/// Error when try to convert an unknown unit
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Unknown unit: '{0}'")]
pub struct UnknownUnit(pub String);

/// Errors from converting
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Mixed unit classes: {from} {to}")]
    MixedClasses { from: UnitClass, to: UnitClass },

    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnit),
}
