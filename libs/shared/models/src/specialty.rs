use std::fmt;
use serde::{Deserialize, Serialize};

/// A clinical specialty expressed as hierarchical text, e.g. `"Cardiología > General"`.
///
/// Matching is a plain substring check over the whole description, so
/// `"General"` matches every general practice regardless of its area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specialty {
    description: String,
}

impl Specialty {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case and whitespace sensitive. The empty query always matches.
    pub fn contains(&self, query: &str) -> bool {
        self.description.contains(query)
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
