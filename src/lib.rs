//! Ingredient list parser with unit aware scaling.
//!
//! Takes the free text ingredient list of a recipe, as people write it, and
//! turns it into structured [`Ingredient`]s. Then they can be scaled to a
//! different yield and shown with kitchen friendly quantities.
//!
//! Also includes:
//! - A unit registry configurable with TOML files.
//! - Weight and volume conversion bridged by ingredient densities.
//!
//! # Basic usage
//! If you just want **to parse a single** ingredient list, see
//! [`parse_recipe`].
//!
//! If you are going to parse more than one, or want to change the
//! configuration of the parser, construct a parser instance yourself with
//! [`IngredientParser::new`]. You can configure which [`Patterns`] are
//! enabled and the [`UnitTable`] used to recognize units.
//!
//! ```rust
//! # use cookscale::{IngredientParser, Patterns, UnitTable};
//! // Create a parser
//! // (this is the default configuration)
//! let parser = IngredientParser::new(Patterns::all(), UnitTable::bundled());
//! # assert_eq!(parser, IngredientParser::default());
//! ```
//!
//! Then use the parser:
//!
//! ```rust
//! # use cookscale::IngredientParser;
//! # let parser = IngredientParser::default();
//! let ingredients = parser.parse("2 cups flour\n3 eggs").into_result()?;
//! assert_eq!(ingredients.len(), 2);
//! assert_eq!(ingredients[0].name, "Flour");
//! assert_eq!(ingredients[0].unit, "cups");
//! assert_eq!(ingredients[1].unit, "");
//! # Ok::<(), cookscale::error::ParseError>(())
//! ```
//!
//! Lines that can't be understood are skipped, the rest is still parsed.

#![warn(rustdoc::broken_intra_doc_links, clippy::doc_markdown)]

#[cfg(doc)]
pub mod _features {
    //! This lib has 1 feature, enabled by default:
    //! - `bundled_units`. Includes a units file with the common kitchen units
    //!   in English. The default [`UnitTable`](crate::convert::UnitTable)
    //!   and the free functions of the crate use them.
}

pub mod convert;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod scale;

pub use convert::{convert_with_density, default_units, CustomDensities, DensityTable, UnitTable};
pub use error::{ParseError, ParseResult};
pub use format::format_kitchen_quantity;
pub use model::{Ingredient, ScaledIngredient};
pub use parser::{parse_quantity, Patterns};
pub use scale::ScaleFactor;

/// An ingredient list parser
///
/// Building the [`UnitTable`] takes time, so you may want to create only one
/// parser and reuse it.
///
/// The default parser enables all patterns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngredientParser {
    patterns: Patterns,
    units: UnitTable,
}

impl IngredientParser {
    /// Creates a new parser.
    ///
    /// It is encouraged to reuse the parser and not rebuild it every time.
    pub fn new(patterns: Patterns, units: UnitTable) -> Self {
        Self { patterns, units }
    }

    /// Get the parser unit table
    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Get the enabled patterns
    pub fn patterns(&self) -> Patterns {
        self.patterns
    }

    /// Parse an ingredient list
    ///
    /// Never fails. Use [`ParseResult::into_result`] to treat a list without
    /// ingredients as an error.
    #[tracing::instrument(level = "debug", name = "parse", skip_all, fields(len = text.len()))]
    pub fn parse(&self, text: &str) -> ParseResult {
        parser::parse_ingredients(text, self.patterns, &self.units)
    }

    /// Scale ingredients with this parser units
    ///
    /// See [`scale::scale_ingredients`].
    pub fn scale(
        &self,
        ingredients: &[Ingredient],
        original_yield: f64,
        desired_yield: f64,
    ) -> Vec<ScaledIngredient> {
        scale::scale_ingredients(ingredients, original_yield, desired_yield, &self.units)
    }

    /// Parse, scale and format an ingredient list
    ///
    /// Returns each ingredient with its kitchen friendly quantity, like
    /// `("Flour", "½ cup")`.
    pub fn scale_and_format(
        &self,
        text: &str,
        factor: ScaleFactor,
    ) -> Result<Vec<(String, String)>, ParseError> {
        let ingredients = self.parse(text).into_result()?;
        let scaled = self.scale(&ingredients, factor.original(), factor.desired());
        Ok(scaled
            .into_iter()
            .map(|s| {
                let quantity = s.display(&self.units);
                (s.ingredient.name, quantity)
            })
            .collect())
    }
}

/// Parse an ingredient list with the default units and all patterns
///
/// Returns an empty list when nothing could be parsed, never fails.
///
/// ```
/// let ingredients = cookscale::parse_recipe("2 cups flour");
/// assert_eq!(ingredients[0].quantity, 2.0);
/// assert_eq!(ingredients[0].unit, "cups");
/// assert_eq!(ingredients[0].name, "Flour");
/// assert_eq!(ingredients[0].raw_qty, "2");
///
/// assert!(cookscale::parse_recipe("asdkjh").is_empty());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse_recipe(text: &str) -> Vec<Ingredient> {
    parser::parse_ingredients(text, Patterns::default(), default_units()).into_ingredients()
}

/// Scale ingredients with the default units
///
/// `desired_yield / original_yield` is the factor. Both must be finite and
/// greater than zero, they are not checked. See [`ScaleFactor`] to validate
/// them.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    original_yield: f64,
    desired_yield: f64,
) -> Vec<ScaledIngredient> {
    scale::scale_ingredients(ingredients, original_yield, desired_yield, default_units())
}
