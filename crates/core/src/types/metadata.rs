//! Key-value metadata attached to catalog objects.
//!
//! Both public and private metadata are ordered sequences of entries with
//! unique keys. The product form always submits the complete replacement
//! sequence, so the only thing that has to be derived is which keys the
//! user removed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Entry key, unique within its sequence.
    pub key: String,
    /// Entry value.
    pub value: String,
}

impl MetadataEntry {
    /// Create a new metadata entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Keys present in `current` but absent from `replacement`.
///
/// Comparison is by key only; value changes never cause a removal. Keys are
/// returned in the order they appear in `current`.
#[must_use]
pub fn removed_keys(current: &[MetadataEntry], replacement: &[MetadataEntry]) -> Vec<String> {
    let kept: HashSet<&str> = replacement.iter().map(|entry| entry.key.as_str()).collect();

    current
        .iter()
        .filter(|entry| !kept.contains(entry.key.as_str()))
        .map(|entry| entry.key.clone())
        .collect()
}
