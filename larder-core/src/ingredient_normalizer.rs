//! Ingredient name normalization.
//!
//! Reduces a raw ingredient phrase (e.g., "2 cups all-purpose flour, sifted")
//! to the canonical name used for matching: lowercase, with the leading
//! quantity and unit, parentheticals and descriptor words removed.

use std::sync::LazyLock;

use regex::Regex;

/// Unit words stripped when they lead the phrase (after any quantity).
const UNITS: &[&str] = &[
    "tablespoons",
    "tablespoon",
    "teaspoons",
    "teaspoon",
    "packages",
    "package",
    "serving",
    "ounces",
    "pounds",
    "bottle",
    "ounce",
    "pound",
    "cups",
    "tbsp",
    "cup",
    "tsp",
    "lbs",
    "jar",
    "can",
    "lb",
    "oz",
];

/// Descriptor words and phrases removed wherever they appear as whole words.
/// Longer phrases come first so "or to taste" wins over "to taste".
const DESCRIPTORS: &[&str] = &[
    "or to taste",
    "to taste",
    "as needed",
    "for garnish",
    "optional",
    "softened",
    "shredded",
    "chopped",
    "divided",
    "finely",
    "thinly",
    "frozen",
    "ground",
    "minced",
    "sliced",
    "grated",
    "melted",
    "beaten",
    "medium",
    "fresh",
    "dried",
    "whole",
    "diced",
    "large",
    "small",
];

/// Leading amount: an integer or decimal, optionally a fraction or range
/// ("1/2", "2-3"), plus trailing whitespace.
static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?(?:\s*[/-]\s*\d+(?:\.\d+)?)?\s*").expect("Invalid quantity regex")
});

static UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = UNITS
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^(?:{alternatives})\s+")).expect("Invalid unit regex")
});

static PARENTHETICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthetical regex"));

static DESCRIPTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = DESCRIPTORS
        .iter()
        .map(|desc| regex::escape(desc))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).expect("Invalid descriptor regex")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Normalize a raw ingredient phrase into its canonical name.
///
/// The stripping pass is repeated until it stops changing the string, so
/// inputs like "1 1/2 cups water" lose both quantity tokens and the result
/// is stable: `normalize(&normalize(x)) == normalize(x)`. A pass that keeps
/// the length can only have turned lone tabs or newlines into spaces, and
/// the pass after it is a no-op.
///
/// Never returns an empty string for non-blank input. If stripping would
/// remove everything, the last non-empty form is kept (for a single pass
/// that is the lowercased, trimmed input). Blank input is returned as-is.
pub fn normalize(raw: &str) -> String {
    let mut current = raw.trim().to_lowercase();
    if current.is_empty() {
        return raw.to_string();
    }

    loop {
        let next = strip_once(&current);
        if next.is_empty() || next == current {
            return current;
        }
        current = next;
    }
}

/// One pass of quantity, unit, parenthetical and descriptor removal.
fn strip_once(s: &str) -> String {
    let s = QUANTITY_REGEX.replace(s, "");
    let s = UNIT_REGEX.replace(&s, "");
    let s = PARENTHETICAL_REGEX.replace_all(&s, "");
    let s = DESCRIPTOR_REGEX.replace_all(&s, "");
    let s = WHITESPACE_REGEX.replace_all(&s, " ");

    s.trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}
