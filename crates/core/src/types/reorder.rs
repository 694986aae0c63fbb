//! Drag-and-drop reordering of ordered lists.

use serde::{Deserialize, Serialize};

/// Errors that can occur when moving a list element.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    #[error("Reorder index out of range: moving {old_index} -> {new_index} in a list of {len}")]
    OutOfRange {
        old_index: usize,
        new_index: usize,
        len: usize,
    },
}

/// A single element move reported by a sortable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEvent {
    /// Position the element was dragged from.
    pub old_index: usize,
    /// Position the element was dropped at.
    pub new_index: usize,
}

impl ReorderEvent {
    /// Create a new reorder event.
    #[must_use]
    pub const fn new(old_index: usize, new_index: usize) -> Self {
        Self {
            old_index,
            new_index,
        }
    }
}

/// Move one element of `items` from `old_index` to `new_index`.
///
/// Elements between the two positions shift by one; this is not a swap.
///
/// # Errors
///
/// Returns [`ReorderError::OutOfRange`] unless both indices are `< items.len()`.
pub fn move_item<T>(mut items: Vec<T>, event: ReorderEvent) -> Result<Vec<T>, ReorderError> {
    let len = items.len();
    if event.old_index >= len || event.new_index >= len {
        return Err(ReorderError::OutOfRange {
            old_index: event.old_index,
            new_index: event.new_index,
            len,
        });
    }

    let item = items.remove(event.old_index);
    items.insert(event.new_index, item);
    Ok(items)
}
