//! Product image upload and reorder.

use std::sync::Arc;

use catalog_console_core::{ImageId, ProductId, ReorderEvent, move_item};
use tracing::{debug, instrument};

use super::{MutationTask, ProductDetails, ProductImageApi, spawn_mutation};
use crate::dashboard::{ImageFile, ProductImageCreateVariables, ProductImageReorderVariables};
use crate::error::HandlerError;

/// Alt text sent with every uploaded image; it is edited afterwards on the
/// image screen.
pub const UPLOAD_ALT_TEXT: &str = "";

/// Attaches picked files to a product.
pub struct ImageUploadHandler<A> {
    product_id: ProductId,
    api: Arc<A>,
}

impl<A: ProductImageApi> ImageUploadHandler<A> {
    /// Create a handler for one product.
    #[must_use]
    pub const fn new(product_id: ProductId, api: Arc<A>) -> Self {
        Self { product_id, api }
    }

    /// Start uploading `file`. No validation of type or size happens here.
    #[instrument(skip(self, file), fields(product_id = %self.product_id, file_name = %file.file_name))]
    pub fn upload(&self, file: ImageFile) -> MutationTask {
        let variables = ProductImageCreateVariables {
            alt: UPLOAD_ALT_TEXT.to_string(),
            image: file,
            product: self.product_id.clone(),
        };

        let api = Arc::clone(&self.api);
        spawn_mutation("productImageCreate", async move {
            api.create_product_image(variables).await
        })
    }
}

/// Persists drag-and-drop moves in a product's image gallery.
pub struct ImageReorderHandler<A> {
    product_id: ProductId,
    image_ids: Vec<ImageId>,
    api: Arc<A>,
}

impl<A: ProductImageApi> ImageReorderHandler<A> {
    /// Create a handler for one product snapshot.
    #[must_use]
    pub fn new(product: &ProductDetails, api: Arc<A>) -> Self {
        Self {
            product_id: product.id.clone(),
            image_ids: product.image_ids(),
            api,
        }
    }

    /// Start saving the order that results from `event`.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Reorder`] without dispatching anything if
    /// either index is outside the image list.
    #[instrument(skip(self), fields(product_id = %self.product_id))]
    pub fn reorder(&self, event: ReorderEvent) -> Result<MutationTask, HandlerError> {
        let images_ids = move_item(self.image_ids.clone(), event)?;
        debug!(images = images_ids.len(), "Submitting image order");

        let variables = ProductImageReorderVariables {
            images_ids,
            product_id: self.product_id.clone(),
        };

        let api = Arc::clone(&self.api);
        Ok(spawn_mutation("productImageReorder", async move {
            api.reorder_product_images(variables).await
        }))
    }
}

impl<A> std::fmt::Debug for ImageUploadHandler<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUploadHandler")
            .field("product_id", &self.product_id)
            .finish_non_exhaustive()
    }
}

impl<A> std::fmt::Debug for ImageReorderHandler<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageReorderHandler")
            .field("product_id", &self.product_id)
            .field("image_ids", &self.image_ids)
            .finish_non_exhaustive()
    }
}
