// 📚 Catalog Entity - a technology stack version and its technologies
//
// The catalog owns its technology list outright. Order is insertion order and
// is never changed by an update; names are not forced to be unique.

use crate::entities::null_as_default;
use crate::entities::technology::Technology;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATALOG ENTITY
// ============================================================================

/// Top-level persisted record.
///
/// Serialized field order is `version`, `description`, `technologies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    /// Stack version, e.g. "10"
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,

    /// Human description, e.g. "Jakarta EE 10"
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Technologies in insertion order
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<Technology>,
}

impl Catalog {
    pub fn new(
        version: impl Into<String>,
        description: impl Into<String>,
        technologies: Vec<Technology>,
    ) -> Self {
        Catalog {
            version: version.into(),
            description: description.into(),
            technologies,
        }
    }

    /// First technology whose name matches `name`, ignoring case
    pub fn find_technology(&self, name: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.matches_name(name))
    }

    /// Replace the description of the first technology named like `candidate`.
    ///
    /// `None` and an unknown name are both no-ops, not errors. The matched
    /// entry keeps its own name and position. Returns whether anything changed.
    pub fn update_technology(&mut self, candidate: Option<&Technology>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };

        match self
            .technologies
            .iter_mut()
            .find(|t| t.matches_name(&candidate.name))
        {
            Some(existing) => {
                existing.description = candidate.description.clone();
                tracing::debug!(name = %existing.name, "Updated technology description");
                true
            }
            None => {
                tracing::debug!(name = %candidate.name, "No technology matched, nothing updated");
                false
            }
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog {{ version: {:?}, description: {:?}, technologies: [",
            self.version, self.description
        )?;
        for (i, tech) in self.technologies.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tech)?;
        }
        write!(f, "] }}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
