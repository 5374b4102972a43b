//! Split a recipe text block into candidate ingredient segments

use once_cell::sync::Lazy;
use regex::Regex;

// `all-pur-\npose`
static HYPHEN_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)-\r?\n\s*(\p{Ll})").unwrap());

/// Split `text` in segments
///
/// Every non empty line is a segment, trimmed. A line with a comma and two
/// or more parenthesized groups that contain a digit is an inline list
/// (`flour (200 g), sugar (100 g)`) and is split in the commas outside the
/// parentheses.
///
/// ```
/// # use cookscale::parser::segments;
/// let text = "2 cups flour\n\n  flour (200 g), sugar (1, maybe 2 tbsp)  ";
/// assert_eq!(
///     segments(text),
///     ["2 cups flour", "flour (200 g)", "sugar (1, maybe 2 tbsp)"]
/// );
/// ```
pub fn segments(text: &str) -> Vec<String> {
    let text = HYPHEN_BREAK.replace_all(text, "$1$2");
    let mut out = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_inline_list(line) {
            out.extend(
                split_top_level_commas(line)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        } else {
            out.push(line.to_string());
        }
    }
    out
}

fn is_inline_list(line: &str) -> bool {
    line.contains(',') && numeric_groups(line) >= 2
}

/// Number of `(...)` groups with at least one digit
fn numeric_groups(line: &str) -> usize {
    let mut count = 0;
    let mut depth = 0usize;
    let mut has_digit = false;
    for c in line.chars() {
        match c {
            '(' => {
                if depth == 0 {
                    has_digit = false;
                }
                depth += 1;
            }
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 && has_digit {
                    count += 1;
                }
            }
            c if depth > 0 && c.is_ascii_digit() => has_digit = true,
            _ => {}
        }
    }
    count
}

fn split_top_level_commas(line: &str) -> impl Iterator<Item = &str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in line.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&line[start..]);
    parts.into_iter()
}
