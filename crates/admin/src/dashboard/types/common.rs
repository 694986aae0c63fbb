//! Common types shared across mutations.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Mutation Errors
// =============================================================================

/// A structured error reported by a single mutation.
///
/// Every part is optional; the API omits `field` for errors that are not
/// tied to an input field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutationError {
    /// Input field the error refers to.
    pub field: Option<String>,
    /// Machine-readable error code (e.g. `UNIQUE`, `REQUIRED`).
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
}

impl MutationError {
    /// Create a mutation error from its parts.
    #[must_use]
    pub fn new(field: Option<&str>, code: Option<&str>, message: Option<&str>) -> Self {
        Self {
            field: field.map(String::from),
            code: code.map(String::from),
            message: message.map(String::from),
        }
    }
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .message
            .as_deref()
            .or(self.code.as_deref())
            .unwrap_or("unknown error");

        match &self.field {
            Some(field) => write!(f, "{field}: {text}"),
            None => f.write_str(text),
        }
    }
}

/// Payload of any mutation, reduced to its error list.
///
/// Every mutation document aliases its error field to `errors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorsPayload {
    /// Errors reported by the mutation; empty on success.
    #[serde(default)]
    pub errors: Vec<MutationError>,
}
