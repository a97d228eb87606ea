use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A service provider listed in the directory. Records are immutable seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub profession: String,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub location: String,
    pub rating: f32,
    pub image_url: String,
    pub hourly_rate: u32,
}

impl Worker {
    /// Case-insensitive containment against the profession or any skill.
    /// `needle` must already be lowercase.
    pub fn practices(&self, needle: &str) -> bool {
        self.profession.to_lowercase().contains(needle)
            || self
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(needle))
    }

    /// `needle` must already be lowercase.
    pub fn is_located_in(&self, needle: &str) -> bool {
        self.location.to_lowercase().contains(needle)
    }

    /// Unstructured scan over every descriptive field. `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.practices(needle)
            || self
                .languages
                .iter()
                .any(|language| language.to_lowercase().contains(needle))
            || self.is_located_in(needle)
    }
}
