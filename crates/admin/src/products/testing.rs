//! In-memory collaborator for handler tests.

use tokio::sync::Mutex;

use super::{MetadataApi, ProductImageApi, ProductUpdateApi};
use crate::dashboard::{
    ApiError, MutationError, ProductImageCreateVariables, ProductImageReorderVariables,
    ProductUpdateResult, ProductUpdateVariables, SimpleProductUpdateResult,
    SimpleProductUpdateVariables, UpdateMetadataVariables,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    UpdateProduct(ProductUpdateVariables),
    UpdateSimpleProduct(SimpleProductUpdateVariables),
    UpdateMetadata(UpdateMetadataVariables),
    UpdatePrivateMetadata(UpdateMetadataVariables),
    CreateProductImage(ProductImageCreateVariables),
    ReorderProductImages(ProductImageReorderVariables),
}

/// Records every call and answers with canned errors.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Mutex<Vec<Call>>,
    pub product_errors: Vec<MutationError>,
    pub simple_result: SimpleProductUpdateResult,
}

impl Recorder {
    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().await.push(call);
    }
}

impl ProductUpdateApi for Recorder {
    async fn update_product(
        &self,
        variables: ProductUpdateVariables,
    ) -> Result<ProductUpdateResult, ApiError> {
        self.record(Call::UpdateProduct(variables)).await;
        Ok(ProductUpdateResult {
            errors: self.product_errors.clone(),
        })
    }

    async fn update_simple_product(
        &self,
        variables: SimpleProductUpdateVariables,
    ) -> Result<SimpleProductUpdateResult, ApiError> {
        self.record(Call::UpdateSimpleProduct(variables)).await;
        Ok(self.simple_result.clone())
    }
}

impl MetadataApi for Recorder {
    async fn update_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.record(Call::UpdateMetadata(variables)).await;
        Ok(Vec::new())
    }

    async fn update_private_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.record(Call::UpdatePrivateMetadata(variables)).await;
        Ok(Vec::new())
    }
}

impl ProductImageApi for Recorder {
    async fn create_product_image(
        &self,
        variables: ProductImageCreateVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.record(Call::CreateProductImage(variables)).await;
        Ok(Vec::new())
    }

    async fn reorder_product_images(
        &self,
        variables: ProductImageReorderVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.record(Call::ReorderProductImages(variables)).await;
        Ok(Vec::new())
    }
}
