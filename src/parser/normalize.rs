//! Clean up a segment before matching the line patterns

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! re {
    ($name:ident, $re:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).unwrap());
    };
}

re!(BROKEN_WORD, r"(\p{L})-\s+(\p{Ll})");
re!(BULLET, r"^[\s\-–—•·∙◦○●▪▫■□►▸▶➤➢→✓✔✗❖*+]+");
re!(REPEATED_COLON, r":{2,}");
re!(REPEATED_ARROW, r">{2,}");
re!(ELLIPSIS, r"\.{3,}|…");
re!(TIMES, r"(?i)\bx\s?(\d)");
re!(FILLER, r"(?i)\byep:");
re!(STRAY, r"[@?]");
re!(ONE, r"(?i)\bone\b");
re!(EXT, r"(?i)\bext\.");
re!(GRAN, r"(?i)\bgran\.");
re!(SPACES, r"\s+");

/// Normalize one segment
///
/// Steps, in order:
/// 1. Rejoin words broken by a hyphen and a space (`flo- ur`).
/// 2. Strip leading bullets, dashes, asterisks and plus signs.
/// 3. Collapse `::` and `>>>`, remove ellipses.
/// 4. `x4` is `4`, drop stray `@` and `?` and the filler `yep:`.
/// 5. The word `one` is `1`. Other number words are left to
///    [`parse_quantity`](super::parse_quantity).
/// 6. A `.` between two letters is a space (`milk.whole`).
/// 7. Expand `ext.` and `gran.`.
/// 8. Collapse whitespace and trim.
pub fn normalize_line(segment: &str) -> String {
    let s = BROKEN_WORD.replace_all(segment, "$1$2");
    let s = BULLET.replace(&s, "");
    let s = REPEATED_COLON.replace_all(&s, ":");
    let s = REPEATED_ARROW.replace_all(&s, ">");
    let s = ELLIPSIS.replace_all(&s, " ");
    let s = TIMES.replace_all(&s, "$1");
    let s = FILLER.replace_all(&s, " ");
    let s = STRAY.replace_all(&s, "");
    let s = ONE.replace_all(&s, "1");
    let s = split_glued_words(&s);
    let s = EXT.replace_all(&s, "extract ");
    let s = GRAN.replace_all(&s, "granulated ");
    SPACES.replace_all(&s, " ").trim().to_string()
}

fn split_glued_words(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let glued = c == '.'
                && i > 0
                && chars[i - 1].is_alphabetic()
                && chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
            if glued {
                ' '
            } else {
                c
            }
        })
        .collect()
}
