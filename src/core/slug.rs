//! Deterministic slug derivation for catalog identifiers.
//!
//! Re-deriving the registry from the same source text must yield identical
//! identifiers, so slugging is a pure function of the display text: lowercase
//! ASCII, apostrophes dropped, every other non-alphanumeric run collapsed to
//! a single hyphen.

use regex::Regex;
use std::sync::LazyLock;

static APOSTROPHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"['\u{2019}]").expect("valid apostrophe pattern"));
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid separator pattern"));

/// Derive a stable identifier slug from display text.
///
/// `"Don't Repeat Yourself"` becomes `dont-repeat-yourself`,
/// `"Structure & Modularity"` becomes `structure-modularity`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = APOSTROPHES.replace_all(&lowered, "");
    NON_ALNUM
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}
