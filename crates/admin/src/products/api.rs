//! Mutation functions the product handlers are injected with.
//!
//! Handlers never talk to the network themselves. They shape variables and
//! call these traits; [`crate::dashboard::DashboardClient`] is the production
//! implementation and tests use in-memory recorders.
//!
//! Methods return `Send` futures so handlers can move calls onto background
//! tasks.

use std::future::Future;

use crate::dashboard::{
    ApiError, MutationError, ProductImageCreateVariables, ProductImageReorderVariables,
    ProductUpdateResult, ProductUpdateVariables, SimpleProductUpdateResult,
    SimpleProductUpdateVariables, UpdateMetadataVariables,
};

/// Product update mutations.
pub trait ProductUpdateApi: Send + Sync + 'static {
    /// Update a product that manages its variants separately.
    fn update_product(
        &self,
        variables: ProductUpdateVariables,
    ) -> impl Future<Output = Result<ProductUpdateResult, ApiError>> + Send;

    /// Update a simple product together with its only variant and stocks.
    fn update_simple_product(
        &self,
        variables: SimpleProductUpdateVariables,
    ) -> impl Future<Output = Result<SimpleProductUpdateResult, ApiError>> + Send;
}

/// Metadata mutations.
pub trait MetadataApi: Send + Sync + 'static {
    /// Replace public metadata and delete removed keys.
    fn update_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> impl Future<Output = Result<Vec<MutationError>, ApiError>> + Send;

    /// Replace private metadata and delete removed keys.
    fn update_private_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> impl Future<Output = Result<Vec<MutationError>, ApiError>> + Send;
}

/// Product media mutations.
pub trait ProductImageApi: Send + Sync + 'static {
    /// Attach a new image to a product.
    fn create_product_image(
        &self,
        variables: ProductImageCreateVariables,
    ) -> impl Future<Output = Result<Vec<MutationError>, ApiError>> + Send;

    /// Set the order of a product's images.
    fn reorder_product_images(
        &self,
        variables: ProductImageReorderVariables,
    ) -> impl Future<Output = Result<Vec<MutationError>, ApiError>> + Send;
}
