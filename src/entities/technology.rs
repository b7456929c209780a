// 🔧 Technology Entity - one named entry in a catalog
//
// Name is the lookup key (case-insensitive), description is the value that
// gets replaced on update. Equality stays case-sensitive on both fields.

use crate::entities::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TECHNOLOGY ENTITY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Technology {
    /// Lookup key, e.g. "Maven"
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Free text, e.g. "build automation tool"
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl Technology {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Technology {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check if `name` refers to this technology, ignoring case
    pub fn matches_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }
}

/// Char-by-char comparison: two chars match when their uppercase forms are
/// equal, or failing that the lowercase forms of those uppercase forms.
/// Names with a different number of chars never match.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if x == y {
                    continue;
                }
                let (ux, uy) = (simple_upper(x), simple_upper(y));
                if ux != uy && simple_lower(ux) != simple_lower(uy) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

// Single-char case mappings. `char::to_uppercase` expands a few chars
// ('ß' -> "SS"); those keep their own form.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// Only 'İ' expands on lowercase ("i\u{307}"); its single-char form is 'i'.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_ignores_case() {
        let jackson = Technology::new("Jackson", "library JSON");

        assert!(jackson.matches_name("Jackson"));
        assert!(jackson.matches_name("jackson"));
        assert!(jackson.matches_name("JACKSON"));
        assert!(!jackson.matches_name("Jackson2"));
        assert!(!jackson.matches_name(""));
    }

    #[test]
    fn test_matches_name_non_ascii() {
        let road = Technology::new("ΟΔΟΣ", "Greek word");
        assert!(road.matches_name("οδοσ"), "Medial sigma matches capital sigma");
        assert!(road.matches_name("οδος"), "Final sigma matches capital sigma");

        let istanbul = Technology::new("İstanbul", "city");
        assert!(istanbul.matches_name("istanbul"));
        assert!(istanbul.matches_name("ISTANBUL"));

        let strasse = Technology::new("Straße", "street");
        assert!(strasse.matches_name("STRAßE"));
        assert!(
            !strasse.matches_name("STRASSE"),
            "Different char counts never match"
        );
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let tech: Technology =
            serde_json::from_str(r#"{"name": null, "description": "build"}"#).unwrap();

        assert_eq!(tech.name, "");
        assert_eq!(tech.description, "build");
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = Technology::new("Maven", "build automation tool");
        let b = Technology::new("maven", "build automation tool");

        assert_ne!(a, b, "Equality must compare names exactly");
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display() {
        let maven = Technology::new("Maven", "build automation tool");
        assert_eq!(maven.to_string(), "Maven: build automation tool");
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let tech: Technology = serde_json::from_str(r#"{"name": "Maven"}"#).unwrap();

        assert_eq!(tech.name, "Maven");
        assert_eq!(tech.description, "");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = serde_json::from_str::<Technology>(
            r#"{"name": "Maven", "description": "build", "vendor": "Apache"}"#,
        );
        assert!(result.is_err(), "Unknown keys do not map onto a technology");
    }
}
