//! Product edit screen submission handlers.
//!
//! Three independent handlers adapt form state into mutation calls:
//!
//! - [`UpdateHandler`] - saves the product form, picking the mutation by
//!   [`ProductKind`], then syncs metadata when the save succeeded
//! - [`ImageUploadHandler`] - attaches a picked file to the product
//! - [`ImageReorderHandler`] - persists a drag-and-drop image move
//!
//! Each handler captures its arguments at construction and holds no mutable
//! state, so one handler can serve any number of submissions.
//!
//! # Background calls
//!
//! Metadata sync, image upload and image reorder are fire-and-forget: they
//! run on spawned Tokio tasks and the handler returns as soon as the task is
//! submitted. A failed background call is logged at `error` level (and
//! reaches Sentry when it is configured) and is otherwise dropped. The
//! returned [`MutationTask`] handles let callers that need the outcome await
//! it; dropping a handle does not cancel the task.

mod api;
mod details;
mod form;
mod images;
mod update;

#[cfg(test)]
mod testing;

pub use api::{MetadataApi, ProductImageApi, ProductUpdateApi};
pub use details::{ProductDetails, ProductImage, ProductKind, VariantSummary};
pub use form::{AttributeSelection, FormsetStock, ProductUpdateForm};
pub use images::{ImageReorderHandler, ImageUploadHandler, UPLOAD_ALT_TEXT};
pub use update::{MetadataSync, UpdateHandler, UpdateOutcome};

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::{Instrument, debug, error, warn};

use crate::dashboard::{ApiError, MutationError, format_mutation_errors};
use crate::error::HandlerError;

/// Outcome of one background mutation.
pub type MutationResult = Result<Vec<MutationError>, ApiError>;

/// Handle to a background mutation.
pub type MutationTask = JoinHandle<MutationResult>;

/// Spawn a mutation call that nobody has to wait for.
///
/// The task runs inside the caller's span and logs its own outcome.
fn spawn_mutation<F>(operation: &'static str, call: F) -> MutationTask
where
    F: Future<Output = MutationResult> + Send + 'static,
{
    let task = async move {
        let result = call.await;
        match &result {
            Ok(errors) if errors.is_empty() => {
                debug!(operation, "Background mutation succeeded");
            }
            Ok(errors) => {
                warn!(
                    operation,
                    errors = %format_mutation_errors(errors),
                    "Background mutation reported errors"
                );
            }
            Err(e) => {
                error!(operation, error = %e, "Background mutation failed");
            }
        }
        result
    };

    tokio::spawn(task.in_current_span())
}

/// Wait for a background mutation.
///
/// # Errors
///
/// Returns [`HandlerError::Api`] if the call failed and
/// [`HandlerError::Task`] if the task panicked or was cancelled.
pub async fn wait_for(task: MutationTask) -> Result<Vec<MutationError>, HandlerError> {
    Ok(task.await??)
}
