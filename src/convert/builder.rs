use std::sync::Arc;

use thiserror::Error;

use super::{
    units_file::{ExtendEntry, UnitEntry, UnitsFile},
    Unit, UnitClass, UnitIndex, UnitTable,
};

/// Builder to create a custom [`UnitTable`]
///
/// The builder uses [`UnitsFile`] to configure the table. More than one
/// file can be layered. Order matters, as one file can extend the units of
/// another added before.
#[derive(Debug, Default)]
pub struct UnitTableBuilder {
    all_units: Vec<Unit>,
    symbol_index: UnitIndex,
    alias_index: UnitIndex,
}

impl UnitTableBuilder {
    /// New empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the bundled units to the builder
    ///
    /// This is only available with the `bundled_units` feature.
    #[cfg(feature = "bundled_units")]
    pub fn with_bundled_units(mut self) -> Result<Self, UnitTableBuilderError> {
        self.add_bundled_units()?;
        Ok(self)
    }

    /// Add the bundled units to the builder
    ///
    /// This is only available with the `bundled_units` feature.
    #[cfg(feature = "bundled_units")]
    pub fn add_bundled_units(&mut self) -> Result<&mut Self, UnitTableBuilderError> {
        self.add_units_file(UnitsFile::bundled())?;
        Ok(self)
    }

    /// Add a [`UnitsFile`] to the builder
    pub fn with_units_file(mut self, units: UnitsFile) -> Result<Self, UnitTableBuilderError> {
        self.add_units_file(units)?;
        Ok(self)
    }

    /// Add a [`UnitsFile`] to the builder
    pub fn add_units_file(&mut self, units: UnitsFile) -> Result<&mut Self, UnitTableBuilderError> {
        for entry in units.units {
            self.add_unit(entry)?;
        }

        // extensions always refer to units already added
        for (key, entry) in units.extend {
            self.extend_unit(&key, entry)?;
        }

        Ok(self)
    }

    /// Consume the builder and return the new [`UnitTable`]
    pub fn finish(self) -> UnitTable {
        UnitTable {
            all_units: self.all_units.into_iter().map(Arc::new).collect(),
            symbol_index: self.symbol_index,
            alias_index: self.alias_index,
        }
    }

    fn add_unit(&mut self, entry: UnitEntry) -> Result<usize, UnitTableBuilderError> {
        let name = entry.name.trim().to_lowercase();
        if name.is_empty() {
            return Err(UnitTableBuilderError::EmptyName { class: entry.class });
        }
        if !entry.to_base.is_finite() || entry.to_base <= 0.0 {
            return Err(UnitTableBuilderError::InvalidRatio {
                name,
                to_base: entry.to_base,
            });
        }
        let plural = match entry.plural {
            Some(p) => p.trim().to_lowercase(),
            None => format!("{name}s"),
        };

        let unit = Unit {
            name: name.into(),
            plural: plural.into(),
            symbols: entry.symbols.into_iter().map(Arc::from).collect(),
            aliases: entry
                .aliases
                .into_iter()
                .map(|a| Arc::from(a.to_lowercase()))
                .collect(),
            class: entry.class,
            to_base: if entry.class == UnitClass::Count {
                1.0
            } else {
                entry.to_base
            },
        };

        let id = self.all_units.len();
        self.symbol_index.add_keys(unit.symbols.iter(), id)?;
        self.alias_index.add_keys(
            [&unit.name, &unit.plural].into_iter().chain(&unit.aliases),
            id,
        )?;
        self.all_units.push(unit);
        Ok(id)
    }

    fn extend_unit(&mut self, key: &str, entry: ExtendEntry) -> Result<(), UnitTableBuilderError> {
        let id = self
            .symbol_index
            .get_unit_id(key)
            .or_else(|| self.alias_index.get_unit_id(&key.to_lowercase()))
            .ok_or_else(|| UnitTableBuilderError::UnknownExtendUnit {
                key: key.to_string(),
            })?;

        let symbols: Vec<Arc<str>> = entry.symbols.into_iter().map(Arc::from).collect();
        let aliases: Vec<Arc<str>> = entry
            .aliases
            .into_iter()
            .map(|a| Arc::from(a.to_lowercase()))
            .collect();
        self.symbol_index.add_keys(symbols.iter(), id)?;
        self.alias_index.add_keys(aliases.iter(), id)?;

        let unit = &mut self.all_units[id];
        unit.symbols.extend(symbols);
        unit.aliases.extend(aliases);
        Ok(())
    }
}

impl UnitIndex {
    fn add_keys<'a>(
        &mut self,
        keys: impl IntoIterator<Item = &'a Arc<str>>,
        id: usize,
    ) -> Result<(), UnitTableBuilderError> {
        for key in keys {
            if key.trim().is_empty() {
                return Err(UnitTableBuilderError::EmptyUnitKey);
            }
            if let Some(other) = self.0.insert(Arc::clone(key), id) {
                // the same unit may list a key twice, like a plural also given as alias
                if other != id {
                    return Err(UnitTableBuilderError::DuplicateUnit {
                        name: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Errors generated by [`UnitTableBuilder`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UnitTableBuilderError {
    #[error("Duplicate unit, the key points to two different units: {name}")]
    DuplicateUnit { name: String },

    #[error("Unit in extend not found: {key}")]
    UnknownExtendUnit { key: String },

    #[error("Unit without a name in {class}")]
    EmptyName { class: UnitClass },

    #[error("Unit where a symbol or alias is empty")]
    EmptyUnitKey,

    #[error("Unit '{name}' has an invalid base ratio: {to_base}")]
    InvalidRatio { name: String, to_base: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, class: UnitClass, to_base: f64, aliases: &[&str]) -> UnitEntry {
        UnitEntry {
            name: name.to_string(),
            plural: None,
            class,
            to_base,
            symbols: vec![],
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn layered_files() {
        let base = UnitsFile {
            units: vec![entry("cup", UnitClass::Volume, 240.0, &["c"])],
            ..Default::default()
        };
        let mut extend = UnitsFile::default();
        extend.extend.insert(
            "cup".to_string(),
            ExtendEntry {
                symbols: vec![],
                aliases: vec!["Tasse".to_string()],
            },
        );
        let table = UnitTableBuilder::new()
            .with_units_file(base)
            .unwrap()
            .with_units_file(extend)
            .unwrap()
            .finish();
        assert_eq!(table.unit_count(), 1);
        let cup = table.find_unit("tasse").unwrap();
        assert_eq!(&*cup.plural, "cups");
        assert_eq!(cup.to_base, 240.0);
    }

    #[test]
    fn duplicate_alias() {
        let file = UnitsFile {
            units: vec![
                entry("teaspoon", UnitClass::Volume, 5.0, &["t"]),
                entry("tablespoon", UnitClass::Volume, 15.0, &["T"]),
            ],
            ..Default::default()
        };
        // aliases are case insensitive, only symbols can tell them apart
        let err = UnitTableBuilder::new().with_units_file(file).unwrap_err();
        assert_eq!(
            err,
            UnitTableBuilderError::DuplicateUnit {
                name: "t".to_string()
            }
        );
    }

    #[test]
    fn invalid_units() {
        let file = UnitsFile {
            units: vec![entry("gram", UnitClass::Weight, 0.0, &[])],
            ..Default::default()
        };
        assert!(matches!(
            UnitTableBuilder::new().with_units_file(file),
            Err(UnitTableBuilderError::InvalidRatio { .. })
        ));

        let file = UnitsFile {
            units: vec![entry("  ", UnitClass::Weight, 1.0, &[])],
            ..Default::default()
        };
        assert!(matches!(
            UnitTableBuilder::new().with_units_file(file),
            Err(UnitTableBuilderError::EmptyName { .. })
        ));

        let mut file = UnitsFile::default();
        file.extend.insert("bushel".to_string(), ExtendEntry::default());
        assert!(matches!(
            UnitTableBuilder::new().with_units_file(file),
            Err(UnitTableBuilderError::UnknownExtendUnit { .. })
        ));
    }

    #[test]
    fn count_units_do_not_scale() {
        let file = UnitsFile {
            units: vec![entry("egg", UnitClass::Count, 50.0, &[])],
            ..Default::default()
        };
        let table = UnitTableBuilder::new().with_units_file(file).unwrap().finish();
        assert_eq!(table.find_unit("eggs").unwrap().to_base, 1.0);
    }
}
