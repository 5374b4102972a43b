//! Parse result and errors

use serde::Serialize;
use thiserror::Error;

use crate::model::Ingredient;

/// Output of parsing a recipe with the segments that were left out
///
/// Parsing never fails. Segments that can't be turned into an ingredient
/// are skipped and recorded here, the rest of the recipe is still parsed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseResult {
    ingredients: Vec<Ingredient>,
    skipped: Vec<SkippedSegment>,
}

impl ParseResult {
    pub(crate) fn new(ingredients: Vec<Ingredient>, skipped: Vec<SkippedSegment>) -> Self {
        Self {
            ingredients,
            skipped,
        }
    }

    /// Parsed ingredients, in recipe order
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Segments that were not parsed
    pub fn skipped(&self) -> &[SkippedSegment] {
        &self.skipped
    }

    /// Check if no ingredient was found
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Get the ingredients, even if there are none
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        self.ingredients
    }

    /// Split the result in ingredients and skipped segments
    pub fn into_parts(self) -> (Vec<Ingredient>, Vec<SkippedSegment>) {
        (self.ingredients, self.skipped)
    }

    /// Transform into a common Rust [`Result`]
    ///
    /// A recipe without any ingredient is the only error,
    /// [`ParseError::NoIngredients`].
    pub fn into_result(self) -> Result<Vec<Ingredient>, ParseError> {
        if self.ingredients.is_empty() {
            Err(ParseError::NoIngredients {
                skipped: self.skipped.len(),
            })
        } else {
            Ok(self.ingredients)
        }
    }
}

/// A segment that did not produce an ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSegment {
    /// The segment as it was split from the text
    pub segment: String,
    pub reason: SkipReason,
}

/// Why a segment was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// No pattern matched
    NoMatch,
    /// The quantity was `0`, negative, infinite or not a number
    NonPositiveQuantity,
    /// Nothing left of the name after cleaning it
    EmptyName,
}

/// Errors of the whole parse
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Could not parse any ingredients ({skipped} lines skipped)")]
    NoIngredients { skipped: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_error() {
        let res = ParseResult::new(
            vec![],
            vec![SkippedSegment {
                segment: "asdkjh".into(),
                reason: SkipReason::NoMatch,
            }],
        );
        assert!(res.is_empty());
        let err = res.into_result().unwrap_err();
        assert_eq!(err, ParseError::NoIngredients { skipped: 1 });
        assert_eq!(
            err.to_string(),
            "Could not parse any ingredients (1 lines skipped)"
        );
    }

    #[test]
    fn reason_display() {
        assert_eq!(SkipReason::NonPositiveQuantity.to_string(), "non_positive_quantity");
    }
}
