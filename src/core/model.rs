//! Record types for the principle catalog.
//!
//! These are the plain structured records the registry hands to consumers —
//! no formatting, no markup, only the attributes the catalog defines.

use serde::{Deserialize, Serialize};

/// Classification of a category's applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Paradigm {
    Universal,
    Functional,
    ObjectOriented,
}

impl Paradigm {
    /// Kebab-case name used on every string surface (JSON, CLI, catalog text).
    pub fn as_str(&self) -> &'static str {
        match self {
            Paradigm::Universal => "universal",
            Paradigm::Functional => "functional",
            Paradigm::ObjectOriented => "object-oriented",
        }
    }

    /// Lenient string-boundary parse. Unknown values are `None`, not an error:
    /// paradigm filtering is total and an unknown paradigm matches nothing.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "universal" => Some(Paradigm::Universal),
            "functional" => Some(Paradigm::Functional),
            "object-oriented" | "object oriented" | "oo" => Some(Paradigm::ObjectOriented),
            _ => None,
        }
    }
}

impl std::fmt::Display for Paradigm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named grouping of related principles sharing a paradigm tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable slug derived from the title, unique across categories.
    pub identifier: String,
    /// Display text as it appears in the catalog source.
    pub title: String,
    pub paradigm: Paradigm,
    /// Position in catalog order, starting at 0.
    pub ordinal: usize,
}

/// A single named design rule with an explanatory description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    /// Stable slug derived from the name, unique across principles.
    pub identifier: String,
    pub name: String,
    pub description: String,
    /// Identifier of the exactly-one category this principle belongs to.
    pub category_id: String,
    /// Position within its category, starting at 0.
    pub ordinal: usize,
}

/// Loader-boundary input: one category with its principles, in catalog order.
///
/// The registry consumes a sequence of these and never parses raw text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    pub title: String,
    pub paradigm: Paradigm,
    pub principles: Vec<PrincipleSpec>,
}

/// Loader-boundary input: one principle before slug/ordinal assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipleSpec {
    pub name: String,
    pub description: String,
}
