//! Ingredient list parser
//!
//! The text goes through these steps:
//! ```txt
//! text     -> segments          one candidate per line, inline lists split
//! segment  -> normalized        bullets, separators and abbreviations
//! normal   -> raw match         first pattern of the cascade that matches
//! raw      -> ingredient        quantity parsed, unit canonical, name cleaned
//! ```
//! A segment that fails any step is skipped and the rest of the text is
//! still parsed.

mod name;
mod normalize;
mod pattern;
mod quantity;
mod segment;

pub use name::{clean_name, KEPT_NOTES};
pub use normalize::normalize_line;
pub use pattern::Patterns;
pub use quantity::{parse_quantity, FRACTION_GLYPHS};
pub use segment::segments;

use crate::{
    convert::UnitTable,
    error::{ParseResult, SkipReason, SkippedSegment},
    model::Ingredient,
};

/// Parse all the ingredients in a text
pub fn parse_ingredients(text: &str, patterns: Patterns, units: &UnitTable) -> ParseResult {
    let mut ingredients = Vec::new();
    let mut skipped = Vec::new();

    for segment in segments(text) {
        match parse_segment(&segment, patterns, units) {
            Ok(ingredient) => ingredients.push(ingredient),
            Err(reason) => {
                tracing::trace!(%segment, %reason, "skipped segment");
                skipped.push(SkippedSegment { segment, reason });
            }
        }
    }

    ParseResult::new(ingredients, skipped)
}

/// Parse a single segment
pub fn parse_segment(
    segment: &str,
    patterns: Patterns,
    units: &UnitTable,
) -> Result<Ingredient, SkipReason> {
    let line = normalize_line(segment);
    let m = pattern::match_line(&line, patterns, units).ok_or(SkipReason::NoMatch)?;

    let quantity = parse_quantity(m.quantity);
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(SkipReason::NonPositiveQuantity);
    }

    let name = clean_name(&m.joined_name());
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let unit = m
        .unit
        .map(|u| u.name_for(quantity).to_string())
        .unwrap_or_default();

    Ok(Ingredient {
        quantity,
        unit,
        name,
        raw_qty: m.quantity.to_string(),
    })
}
