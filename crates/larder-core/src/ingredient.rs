//! Ingredient identity

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Type given to ingredients that a recipe names but no pantry knows about.
pub const UNKNOWN_KIND: &str = "Unknown";

/// An ingredient identified by name and type.
///
/// Equality and hashing ignore case on both fields, so `"Salt"/"Spice"` and
/// `"salt"/"SPICE"` are the same key in a map.
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// A standalone ingredient of type `"Unknown"`.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(name, UNKNOWN_KIND)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_unknown(&self) -> bool {
        self.kind.eq_ignore_ascii_case(UNKNOWN_KIND)
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        fold(&self.name) == fold(name)
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        fold(&self.name) == fold(&other.name) && fold(&self.kind) == fold(&other.kind)
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold(&self.name).hash(state);
        fold(&self.kind).hash(state);
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
