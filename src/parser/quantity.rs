//! Quantity token to number
//!
//! The token is split in whitespace separated pieces and every piece is
//! added to the total, so `2 1/2` is `2 + 0.5`. Pieces that are not numbers
//! add nothing, the parser never fails and garbage is just `0`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub(crate) const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Unicode vulgar fractions and their value
pub const FRACTION_GLYPHS: &[(char, f64)] = &[
    ('⅛', 0.125),
    ('⅙', 1.0 / 6.0),
    ('⅕', 0.2),
    ('¼', 0.25),
    ('⅓', 1.0 / 3.0),
    ('⅜', 0.375),
    ('⅖', 0.4),
    ('½', 0.5),
    ('⅗', 0.6),
    ('⅝', 0.625),
    ('⅔', 2.0 / 3.0),
    ('¾', 0.75),
    ('⅘', 0.8),
    ('⅚', 5.0 / 6.0),
    ('⅞', 0.875),
    ('⅐', 1.0 / 7.0),
    ('⅑', 1.0 / 9.0),
    ('⅒', 0.1),
];

/// Regex class with all the [`FRACTION_GLYPHS`]
pub(crate) const GLYPH_CLASS: &str = "[⅛⅙⅕¼⅓⅜⅖½⅗⅝⅔¾⅘⅚⅞⅐⅑⅒]";

static NUMBER_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", NUMBER_WORDS.join("|"))).unwrap()
});

// `2+1/2`, `2-1/2` and `2+½`
static GLUED_MIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(\d)\s*[+-]\s*(\d+/\d+|{GLYPH_CLASS})")).unwrap()
});

/// Parse a quantity token into a number
///
/// ```
/// # use cookscale::parser::parse_quantity;
/// assert_eq!(parse_quantity("1"), 1.0);
/// assert_eq!(parse_quantity("1/2"), 0.5);
/// assert_eq!(parse_quantity("2 1/2"), 2.5);
/// assert_eq!(parse_quantity("½"), 0.5);
/// assert_eq!(parse_quantity("one"), 1.0);
/// assert_eq!(parse_quantity("nothing here"), 0.0);
/// ```
pub fn parse_quantity(token: &str) -> f64 {
    let text = replace_number_words(token);
    // before the glyphs become decimals
    let text = GLUED_MIXED.replace_all(&text, "$1 $2");
    let text = replace_glyphs(&text);

    text.split_whitespace().map(piece_value).sum()
}

fn replace_number_words(text: &str) -> Cow<'_, str> {
    NUMBER_WORD.replace_all(text, |caps: &Captures| {
        let word = caps[0].to_lowercase();
        let n = NUMBER_WORDS
            .iter()
            .position(|w| *w == word)
            .map_or(0, |i| i + 1);
        n.to_string()
    })
}

fn replace_glyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match glyph_value(c) {
            Some(v) => {
                out.push(' ');
                out.push_str(&v.to_string());
                out.push(' ');
            }
            None => out.push(c),
        }
    }
    out
}

fn glyph_value(c: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(g, _)| *g == c)
        .map(|&(_, v)| v)
}

fn piece_value(piece: &str) -> f64 {
    match piece.split_once('/') {
        Some((num, den)) => {
            let (Some(num), Some(den)) = (decimal(num), decimal(den)) else {
                return 0.0;
            };
            if den == 0.0 {
                return 0.0;
            }
            num / den
        }
        None => decimal(piece).unwrap_or(0.0),
    }
}

/// `.` or `,` as decimal separator
fn decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let value: f64 = s.replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}
