//! Product form save.

use std::future::Future;
use std::sync::Arc;

use catalog_console_core::{DecimalSeparator, MetadataEntry, removed_keys};
use tracing::{debug, info, instrument};

use super::{
    MetadataApi, MutationResult, MutationTask, ProductDetails, ProductKind, ProductUpdateApi,
    ProductUpdateForm, spawn_mutation,
};
use crate::dashboard::{MutationError, UpdateMetadataVariables};
use crate::error::HandlerError;

/// A metadata sync running in the background.
#[derive(Debug)]
pub struct MetadataSync {
    /// Mutation the task runs (`updateMetadata` or `updatePrivateMetadata`).
    pub operation: &'static str,
    /// Handle to the running mutation.
    pub task: MutationTask,
}

impl MetadataSync {
    fn spawn<F>(operation: &'static str, call: F) -> Self
    where
        F: Future<Output = MutationResult> + Send + 'static,
    {
        Self {
            operation,
            task: spawn_mutation(operation, call),
        }
    }
}

/// Result of a product form save.
#[derive(Debug)]
pub struct UpdateOutcome {
    /// Errors from every update sub-mutation, in submission order.
    pub errors: Vec<MutationError>,
    /// Metadata syncs dispatched after a clean save. Empty when the save
    /// reported errors or the form carried no metadata.
    pub metadata_sync: Vec<MetadataSync>,
}

impl UpdateOutcome {
    /// Whether the save reported no errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Saves the product form.
pub struct UpdateHandler<A> {
    product: ProductDetails,
    kind: ProductKind,
    api: Arc<A>,
    separator: DecimalSeparator,
}

impl<A> std::fmt::Debug for UpdateHandler<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateHandler")
            .field("product_id", &self.product.id)
            .field("kind", &self.kind)
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl<A> UpdateHandler<A>
where
    A: ProductUpdateApi + MetadataApi,
{
    /// Create a handler for one product snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MissingVariant`] if the product is simple but
    /// has no variant to edit.
    pub fn new(product: ProductDetails, api: Arc<A>) -> Result<Self, HandlerError> {
        let kind = product.kind()?;
        Ok(Self {
            product,
            kind,
            api,
            separator: DecimalSeparator::default(),
        })
    }

    /// Set the decimal separator used by price and weight fields.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.separator = separator;
        self
    }

    /// The product kind the handler dispatches on.
    #[must_use]
    pub const fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Save the form.
    ///
    /// Resolves once the update mutation has completed. When it reported no
    /// errors, metadata and private metadata carried by the form are synced
    /// on background tasks that this call does not wait for.
    ///
    /// # Errors
    ///
    /// Returns an input error before any call is made if a numeric field
    /// does not parse, and [`HandlerError::Api`] if the update request fails.
    #[instrument(skip(self, form), fields(product_id = %self.product.id))]
    pub async fn submit(&self, form: ProductUpdateForm) -> Result<UpdateOutcome, HandlerError> {
        let variables = form.product_variables(self.product.id.clone(), self.separator)?;

        let errors = match &self.kind {
            ProductKind::WithVariants => {
                debug!("Updating product with separately managed variants");
                self.api.update_product(variables).await?.errors
            }
            ProductKind::Simple { variant_id } => {
                debug!(variant_id = %variant_id, "Updating simple product");
                let variables =
                    form.simple_product_variables(variables, variant_id.clone(), self.separator)?;
                self.api.update_simple_product(variables).await?.into_errors()
            }
        };

        if !errors.is_empty() {
            info!(errors = errors.len(), "Product update reported errors, skipping metadata sync");
            return Ok(UpdateOutcome {
                errors,
                metadata_sync: Vec::new(),
            });
        }

        let ProductUpdateForm {
            metadata,
            private_metadata,
            ..
        } = form;

        let mut metadata_sync = Vec::new();
        if let Some(replacement) = metadata {
            let variables = self.metadata_variables(&self.product.metadata, replacement);
            let api = Arc::clone(&self.api);
            metadata_sync.push(MetadataSync::spawn("updateMetadata", async move {
                api.update_metadata(variables).await
            }));
        }
        if let Some(replacement) = private_metadata {
            let variables = self.metadata_variables(&self.product.private_metadata, replacement);
            let api = Arc::clone(&self.api);
            metadata_sync.push(MetadataSync::spawn("updatePrivateMetadata", async move {
                api.update_private_metadata(variables).await
            }));
        }

        info!(metadata_syncs = metadata_sync.len(), "Product updated");
        Ok(UpdateOutcome {
            errors,
            metadata_sync,
        })
    }

    fn metadata_variables(
        &self,
        current: &[MetadataEntry],
        replacement: Vec<MetadataEntry>,
    ) -> UpdateMetadataVariables {
        UpdateMetadataVariables {
            id: self.product.id.clone(),
            keys_to_delete: removed_keys(current, &replacement),
            input: replacement,
        }
    }
}
