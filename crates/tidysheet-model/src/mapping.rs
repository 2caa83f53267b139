//! Canonical-field to source-column mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The winning source column for one canonical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedColumn {
    /// Source column label as it appears in the input.
    pub source: String,
    /// Alias that produced the best score.
    pub alias: String,
    /// Similarity score, 0–100.
    pub score: f64,
}

/// Mapping from canonical field name to its matched source column.
///
/// Contains only fields that matched at or above the threshold. A field
/// appears at most once; the same source column may be claimed by more than
/// one field (the matcher performs no mutual exclusion).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: BTreeMap<String, MappedColumn>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, column: MappedColumn) {
        self.entries.insert(field.to_string(), column);
    }

    pub fn get(&self, field: &str) -> Option<&MappedColumn> {
        self.entries.get(field)
    }

    pub fn source_for(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(|m| m.source.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MappedColumn)> {
        self.entries.iter()
    }
}
