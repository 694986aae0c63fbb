//! Product update operations for the catalog API.

use tracing::instrument;

use super::{
    DashboardClient, payload_errors,
    mutations::{ProductUpdate, SimpleProductUpdate},
};
use crate::dashboard::{
    ApiError, ProductUpdateResult, ProductUpdateVariables, SimpleProductUpdateResult,
    SimpleProductUpdateVariables,
};
use crate::products::ProductUpdateApi;

impl ProductUpdateApi for DashboardClient {
    /// Update a product's shared fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries
    /// top-level GraphQL errors. Validation errors are returned in the result.
    #[instrument(skip(self, variables), fields(product_id = %variables.id))]
    async fn update_product(
        &self,
        variables: ProductUpdateVariables,
    ) -> Result<ProductUpdateResult, ApiError> {
        let response = self.execute::<ProductUpdate>(variables).await?;

        Ok(ProductUpdateResult {
            errors: payload_errors(response.product_update, "productUpdate")?,
        })
    }

    /// Update a simple product, its variant and its stocks in one request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response carries top-level
    /// GraphQL errors, or any of the five payloads is missing.
    #[instrument(
        skip(self, variables),
        fields(
            product_id = %variables.product.id,
            variant_id = %variables.product_variant_id,
        )
    )]
    async fn update_simple_product(
        &self,
        variables: SimpleProductUpdateVariables,
    ) -> Result<SimpleProductUpdateResult, ApiError> {
        let response = self.execute::<SimpleProductUpdate>(variables).await?;

        Ok(SimpleProductUpdateResult {
            product_update: payload_errors(response.product_update, "productUpdate")?,
            stocks_create: payload_errors(
                response.product_variant_stocks_create,
                "productVariantStocksCreate",
            )?,
            stocks_delete: payload_errors(
                response.product_variant_stocks_delete,
                "productVariantStocksDelete",
            )?,
            stocks_update: payload_errors(
                response.product_variant_stocks_update,
                "productVariantStocksUpdate",
            )?,
            variant_update: payload_errors(
                response.product_variant_update,
                "productVariantUpdate",
            )?,
        })
    }
}
