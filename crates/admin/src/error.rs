//! Unified error handling for the product handlers.

use catalog_console_core::{NormalizeError, ProductId, ReorderError, WarehouseId};
use thiserror::Error;
use tokio::task::JoinError;

use crate::dashboard::ApiError;

/// Errors a product handler can return.
///
/// Validation errors reported by a mutation are not errors here; they are
/// returned as data so the form can show them next to its fields.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The mutation API could not be reached or answered with a protocol error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A price or weight field is not a number.
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] NormalizeError),

    /// A stock formset row has a non-integer quantity.
    #[error("Invalid stock quantity {value:?} for warehouse {warehouse}")]
    InvalidStockQuantity { warehouse: WarehouseId, value: String },

    /// A product without variants was treated as a simple product.
    #[error("Product {0} has no variants; a simple product needs exactly one")]
    MissingVariant(ProductId),

    /// A drag-and-drop move pointed outside the image list.
    #[error("Reorder failed: {0}")]
    Reorder(#[from] ReorderError),

    /// A background mutation task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] JoinError),
}

impl HandlerError {
    /// Whether the error was caused by the submitted input rather than the
    /// API or the runtime.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber(_) | Self::InvalidStockQuantity { .. } | Self::Reorder(_)
        )
    }
}
