//! Kitchen friendly rendering of quantities
//!
//! A scaled quantity like `0.3333 cups` or `48 teaspoons` is hard to read. The
//! formatter moves it to a bigger unit when it grows past a threshold, snaps
//! small values to the usual kitchen fractions and rounds the rest.

use crate::convert::{default_units, UnitTable};

/// Text for quantities that are zero or less
pub const DASH: &str = "a dash";

/// Max absolute error to snap a value to a kitchen fraction
pub const FRACTION_TOLERANCE: f64 = 0.01;

const KITCHEN_FRACTIONS: &[(f64, &str)] = &[
    (0.125, "⅛"),
    (0.25, "¼"),
    (1.0 / 3.0, "⅓"),
    (0.5, "½"),
    (2.0 / 3.0, "⅔"),
    (0.75, "¾"),
];

struct UpConversion {
    from: &'static str,
    to: &'static str,
    /// also the divisor
    threshold: f64,
}

// Checked in this order, a conversion can feed the next one. For cups the
// gallon check has to come before the quart one.
const UP_CONVERSIONS: &[UpConversion] = &[
    UpConversion {
        from: "teaspoon",
        to: "tablespoon",
        threshold: 3.0,
    },
    UpConversion {
        from: "tablespoon",
        to: "cup",
        threshold: 16.0,
    },
    UpConversion {
        from: "cup",
        to: "gallon",
        threshold: 16.0,
    },
    UpConversion {
        from: "cup",
        to: "quart",
        threshold: 4.0,
    },
    UpConversion {
        from: "quart",
        to: "gallon",
        threshold: 4.0,
    },
    UpConversion {
        from: "gram",
        to: "kilogram",
        threshold: 1000.0,
    },
    UpConversion {
        from: "ounce",
        to: "pound",
        threshold: 16.0,
    },
];

// float noise, `2.9999999999 tsp` is still a tablespoon
const THRESHOLD_EPSILON: f64 = 1e-9;

/// Format a quantity with the [default units](default_units)
///
/// ```
/// # use cookscale::format_kitchen_quantity;
/// assert_eq!(format_kitchen_quantity(16.0, "tbsp"), "1 cup");
/// assert_eq!(format_kitchen_quantity(0.5, "cups"), "½ cup");
/// assert_eq!(format_kitchen_quantity(2.5, "teaspoons"), "2.5 teaspoons");
/// assert_eq!(format_kitchen_quantity(0.0, "cups"), "a dash");
/// ```
pub fn format_kitchen_quantity(qty: f64, unit: &str) -> String {
    format_kitchen_quantity_with(default_units(), qty, unit)
}

/// Format a quantity and unit for display
///
/// - `qty <= 0` is [`DASH`].
/// - Known units are moved up when they pass a threshold (`16 tbsp` is
///   `1 cup`, `1500 g` is `1.5 kg`).
/// - Values under `1` are snapped to `⅛ ¼ ⅓ ½ ⅔ ¾` within
///   [`FRACTION_TOLERANCE`].
/// - Everything else is rounded: integer with thousands separators from
///   `1000`, one decimal from `10`, two from `1` and three below.
///
/// Unknown units are rendered as given. The output only depends on the
/// input.
pub fn format_kitchen_quantity_with(units: &UnitTable, qty: f64, unit: &str) -> String {
    if qty.is_nan() || qty <= 0.0 {
        return DASH.to_string();
    }

    let mut qty = qty;
    let known = units.find_unit(unit).map(|known| {
        let mut name: &str = &known.name;
        for conv in UP_CONVERSIONS {
            if name != conv.from {
                continue;
            }
            let min = conv.threshold - THRESHOLD_EPSILON;
            // `47.99 tsp` would be shown as `16 tablespoons`
            let q = if qty >= min { qty } else { render_number(qty).1 };
            if q >= min {
                qty = q / conv.threshold;
                name = conv.to;
            }
        }
        // up conversions only name bundled units, a custom table may lack them
        units.find_unit(name).unwrap_or(known)
    });

    if qty < 1.0 {
        if let Some(glyph) = kitchen_fraction(qty) {
            let unit = known.map_or(unit, |u| u.name.as_ref());
            return join(glyph.to_string(), unit);
        }
    }

    let (number, shown) = render_number(qty);
    let unit = known.map_or(unit, |u| u.name_for(shown));
    join(number, unit)
}

/// Kitchen fraction glyph for a value under 1
pub fn kitchen_fraction(value: f64) -> Option<&'static str> {
    KITCHEN_FRACTIONS
        .iter()
        .map(|&(v, glyph)| ((value - v).abs(), glyph))
        .filter(|&(err, _)| err <= FRACTION_TOLERANCE)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, glyph)| glyph)
}

/// Rounded text and the value it shows
fn render_number(qty: f64) -> (String, f64) {
    let places = if qty >= 10.0 {
        1
    } else if qty >= 1.0 {
        2
    } else {
        3
    };
    let text = trim_zeros(format!("{qty:.places$}"));
    let shown: f64 = text.parse().unwrap_or(qty);
    // also `999.96`, that rounds up to 1000
    if shown >= 1000.0 {
        let rounded = qty.round();
        return (thousands(rounded), rounded);
    }
    (text, shown)
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
    s
}

fn thousands(value: f64) -> String {
    let digits = format!("{value:.0}");
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", digits.as_str()),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{sign}{digits}");
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn join(number: String, unit: &str) -> String {
    if unit.is_empty() {
        number
    } else {
        format!("{number} {unit}")
    }
}
