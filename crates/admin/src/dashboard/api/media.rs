//! Product media operations for the catalog API.

use tracing::instrument;

use super::{
    DashboardClient, payload_errors,
    mutations::{ProductImageCreate, ProductImageReorder, product_image_create},
};
use crate::dashboard::{
    ApiError, MutationError, ProductImageCreateVariables, ProductImageReorderVariables,
};
use crate::products::ProductImageApi;

impl ProductImageApi for DashboardClient {
    /// Upload an image and attach it to a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails or the payload is missing.
    #[instrument(skip(self, variables), fields(product_id = %variables.product))]
    async fn create_product_image(
        &self,
        variables: ProductImageCreateVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        let ProductImageCreateVariables {
            alt,
            image,
            product,
        } = variables;

        let operation = product_image_create::Variables {
            alt,
            image: None,
            product,
        };

        let response = self
            .execute_upload::<ProductImageCreate>(
                operation,
                image,
                product_image_create::IMAGE_VARIABLE_PATH,
            )
            .await?;

        payload_errors(response.product_image_create, "productImageCreate")
    }

    /// Set the order of a product's images.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is missing.
    #[instrument(
        skip(self, variables),
        fields(product_id = %variables.product_id, images = variables.images_ids.len())
    )]
    async fn reorder_product_images(
        &self,
        variables: ProductImageReorderVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        let response = self.execute::<ProductImageReorder>(variables).await?;

        payload_errors(response.product_image_reorder, "productImageReorder")
    }
}
