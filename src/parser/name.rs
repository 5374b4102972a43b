//! Ingredient name cleanup

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Parenthesized notes with one of these are kept in the name
pub const KEPT_NOTES: &[&str] = &[
    "room", "soft", "unsalt", "melt", "cold", "warm", "packed", "optional",
];

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[=:~>\[\]{}]").unwrap());
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)|[()]").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,;])").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Clean an ingredient name
///
/// Removes separator leftovers and parenthesized notes, except the ones
/// that describe the ingredient (see [`KEPT_NOTES`]). The first letter is
/// capitalized.
///
/// The output of this function is stable, cleaning it again gives the same
/// text.
///
/// ```
/// # use cookscale::parser::clean_name;
/// assert_eq!(clean_name("flour (about) sifted"), "Flour sifted");
/// assert_eq!(clean_name("butter (, softened)"), "Butter (softened)");
/// assert_eq!(clean_name("– milk : "), "Milk");
/// ```
pub fn clean_name(name: &str) -> String {
    let s = SEPARATORS.replace_all(name, " ");
    let s = PARENS.replace_all(&s, |caps: &Captures| match caps.get(1) {
        Some(note) => {
            let note = note.as_str().trim_matches(is_edge_junk);
            if is_kept_note(note) {
                format!("({note})")
            } else {
                String::new()
            }
        }
        None => String::new(),
    });
    let s = SPACES.replace_all(&s, " ");
    let s = SPACE_BEFORE_PUNCT.replace_all(&s, "$1");
    capitalize(s.trim_matches(is_edge_junk))
}

fn is_kept_note(note: &str) -> bool {
    let note = note.to_lowercase();
    KEPT_NOTES.iter().any(|w| note.contains(w))
}

fn is_edge_junk(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '–' | '—' | ',' | ';' | '.')
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
