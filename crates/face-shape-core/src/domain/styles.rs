//! Hairstyle recommendation table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::shape::FaceShape;

/// Static mapping from face shape category to recommended hairstyles.
///
/// Loaded once from a JSON resource keyed by lowercase category name and
/// handed to the analysis loop via explicit configuration. A category
/// without an entry is not an error; lookups simply return `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    entries: HashMap<String, Vec<String>>,
}

impl StyleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an object mapping category
    /// names to arrays of strings.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Returns the recommendations for a shape, in table order.
    #[must_use]
    pub fn lookup(&self, shape: FaceShape) -> Option<&[String]> {
        self.entries.get(shape.as_str()).map(Vec::as_slice)
    }

    /// Number of categories with entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no category has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
