//! Ordered cascade of line patterns
//!
//! Each pattern knows the shape of one way to write an ingredient line. A
//! segment is tried against every enabled pattern, in the order of
//! [`Patterns`], and the first one that matches wins.

use std::borrow::Cow;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::quantity::{GLYPH_CLASS, NUMBER_WORDS};
use crate::convert::{Unit, UnitTable};

bitflags! {
    /// Patterns of the cascade
    ///
    /// The order of the flags is the order of the cascade. Disabling one
    /// removes it without changing the order of the rest.
    ///
    /// [`Patterns::default`] enables all of them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Patterns: u8 {
        /// `Baking powder 2½tsp`
        const SUFFIX_GLUED     = 1 << 0;
        /// `Butter (2 tbsp, softened)`
        const PARENTHETICAL    = 1 << 1;
        /// `2 cups flour`
        const STANDARD         = 1 << 2;
        /// `Flour: 200 g` or `Milk => 1 cup, warm`
        const SEPARATOR        = 1 << 3;
        /// `2 cups flour [sifted]`
        const BRACKETED        = 1 << 4;
        /// `3 eggs`
        const COUNT_QTY_FIRST  = 1 << 5;
        /// `eggs 3`
        const COUNT_NAME_FIRST = 1 << 6;

        /// Patterns that need a known unit
        const MEASURED = Self::SUFFIX_GLUED.bits()
                        | Self::PARENTHETICAL.bits()
                        | Self::STANDARD.bits()
                        | Self::SEPARATOR.bits()
                        | Self::BRACKETED.bits();
        /// Patterns without a unit
        const COUNT = Self::COUNT_QTY_FIRST.bits() | Self::COUNT_NAME_FIRST.bits();
    }
}

impl Default for Patterns {
    /// Enables all patterns
    fn default() -> Self {
        Self::all()
    }
}

/// What a pattern extracted from a segment
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawMatch<'a> {
    /// Pieces of the name in order, joined with a space
    pub name: SmallVec<[Cow<'a, str>; 4]>,
    pub quantity: &'a str,
    /// `None` for count patterns
    pub unit: Option<&'a Unit>,
    pub pattern: Patterns,
}

impl RawMatch<'_> {
    pub fn joined_name(&self) -> String {
        let mut out = String::new();
        for piece in self.name.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(piece);
        }
        out
    }
}

/// One stage of the cascade
struct LinePattern {
    kind: Patterns,
    regex: &'static Lazy<Regex>,
    extract: for<'a> fn(&Captures<'a>) -> SmallVec<[Cow<'a, str>; 4]>,
}

impl LinePattern {
    fn try_match<'a>(&self, segment: &'a str, units: &'a UnitTable) -> Option<RawMatch<'a>> {
        let caps = self.regex.captures(segment)?;
        let quantity = caps.name("qty")?.as_str().trim();
        let name = (self.extract)(&caps);

        let unit: Option<&Unit> = match caps.name("unit") {
            Some(token) => {
                let Some(unit) = units.find_unit(token.as_str()).filter(|u| u.is_measure())
                else {
                    tracing::trace!(pattern = ?self.kind, unit = token.as_str(), "unknown unit");
                    return None;
                };
                Some(&**unit)
            }
            None => None,
        };

        let m = RawMatch {
            name,
            quantity,
            unit,
            pattern: self.kind,
        };

        if self.kind == Patterns::COUNT_NAME_FIRST {
            if !m.name.iter().any(|p| p.chars().any(char::is_alphabetic)) {
                tracing::trace!("name without letters");
                return None;
            }
            if ends_with_measure(&m, units) {
                tracing::trace!("name ends with a unit");
                return None;
            }
        }

        Some(m)
    }
}

// `flour cup 2` is not 2 of "flour cup". Count words like `eggs 2` are fine.
fn ends_with_measure(m: &RawMatch, units: &UnitTable) -> bool {
    m.joined_name()
        .split_whitespace()
        .last()
        .and_then(|word| units.find_unit(word))
        .is_some_and(|u| u.is_measure())
}

fn quantity_re() -> String {
    let words = NUMBER_WORDS.join("|");
    let g = GLYPH_CLASS;
    format!(
        r"\d+(?:\s+|\s*[+-]\s*)\d+/\d+|\d+/\d+|\d+(?:[.,]\d+)?\s*\+?\s*{g}|{g}|\d+(?:[.,]\d+)?|(?i:{words})\b"
    )
}

const UNIT: &str = r"(?:(?i:fl\.?\s*oz\.?)|[A-Za-z]+\.?)";

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| {
            let re = $re
                .replace("QTY", &format!("(?P<qty>{})", quantity_re()))
                .replace("UNIT", &format!("(?P<unit>{UNIT})"));
            Regex::new(&re).unwrap()
        });
    };
}

pattern!(SUFFIX_GLUED, r"^(?P<name>.+?)\s+QTYUNIT$");
pattern!(
    PARENTHETICAL,
    r"^(?P<pre>[^(]*)\((?P<ipre>[^)]*?)QTY\s*UNIT(?P<ipost>[^)]*)\)(?P<post>.*)$"
);
pattern!(STANDARD, r"^QTY\s*UNIT\s+(?P<name>[^\[\]]+)$");
pattern!(
    SEPARATOR,
    r"^(?P<name>[^=:–>~]+?)\s*[=:–>~]+\s*QTY\s*UNIT(?P<extra>.*)$"
);
pattern!(
    BRACKETED,
    r"^QTY\s*UNIT\s+(?P<name>[^\[]+?)\s*\[(?P<extra>[^\]]*)\]\s*$"
);
pattern!(COUNT_QTY_FIRST, r"^QTY\s+(?P<name>[^\d\s].*)$");
pattern!(COUNT_NAME_FIRST, r"^(?P<name>.+?)\s+QTY$");

fn piece<'a>(caps: &Captures<'a>, group: &str) -> Option<Cow<'a, str>> {
    caps.name(group).map(|m| Cow::Borrowed(m.as_str()))
}

fn name_and_extra<'a>(caps: &Captures<'a>) -> SmallVec<[Cow<'a, str>; 4]> {
    ["name", "extra"]
        .into_iter()
        .filter_map(|g| piece(caps, g))
        .collect()
}

// inner text of the parentheses is kept between parentheses, the cleaner
// decides if it stays
fn parenthetical<'a>(caps: &Captures<'a>) -> SmallVec<[Cow<'a, str>; 4]> {
    let mut pieces = SmallVec::new();
    pieces.extend(piece(caps, "pre"));
    let inner = format!(
        "{} {}",
        caps.name("ipre").map_or("", |m| m.as_str()).trim(),
        caps.name("ipost").map_or("", |m| m.as_str()).trim()
    );
    let inner = inner.trim();
    if !inner.is_empty() {
        pieces.push(Cow::Owned(format!("({inner})")));
    }
    pieces.extend(piece(caps, "post"));
    pieces
}

static CASCADE: [LinePattern; 7] = [
    LinePattern {
        kind: Patterns::SUFFIX_GLUED,
        regex: &SUFFIX_GLUED,
        extract: name_and_extra,
    },
    LinePattern {
        kind: Patterns::PARENTHETICAL,
        regex: &PARENTHETICAL,
        extract: parenthetical,
    },
    LinePattern {
        kind: Patterns::STANDARD,
        regex: &STANDARD,
        extract: name_and_extra,
    },
    LinePattern {
        kind: Patterns::SEPARATOR,
        regex: &SEPARATOR,
        extract: name_and_extra,
    },
    LinePattern {
        kind: Patterns::BRACKETED,
        regex: &BRACKETED,
        extract: name_and_extra,
    },
    LinePattern {
        kind: Patterns::COUNT_QTY_FIRST,
        regex: &COUNT_QTY_FIRST,
        extract: name_and_extra,
    },
    LinePattern {
        kind: Patterns::COUNT_NAME_FIRST,
        regex: &COUNT_NAME_FIRST,
        extract: name_and_extra,
    },
];

/// Run the cascade over a normalized segment
///
/// Returns the match of the first enabled pattern that accepts the segment.
pub(crate) fn match_line<'a>(
    segment: &'a str,
    patterns: Patterns,
    units: &'a UnitTable,
) -> Option<RawMatch<'a>> {
    CASCADE
        .iter()
        .filter(|p| patterns.contains(p.kind))
        .find_map(|p| p.try_match(segment, units))
}
