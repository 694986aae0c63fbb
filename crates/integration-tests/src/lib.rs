//! Integration tests for Catalog Console.
//!
//! Scenarios drive the product edit screen handlers end to end against
//! [`ScriptedApi`], an in-memory stand-in for the catalog API that records
//! every mutation it receives. No network access is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalog-console-integration-tests
//! ```

use std::sync::Arc;

use catalog_console_admin::dashboard::{
    ApiError, MutationError, ProductImageCreateVariables, ProductImageReorderVariables,
    ProductUpdateResult, ProductUpdateVariables, SimpleProductUpdateResult,
    SimpleProductUpdateVariables, UpdateMetadataVariables,
};
use catalog_console_admin::products::{
    MetadataApi, ProductDetails, ProductImage, ProductImageApi, ProductUpdateApi, VariantSummary,
};
use catalog_console_core::{ImageId, MetadataEntry, ProductId, VariantId};
use tokio::sync::{Mutex, Semaphore};

const RELEASE_PERMITS: usize = 64;

/// A mutation received by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    UpdateProduct(ProductUpdateVariables),
    UpdateSimpleProduct(SimpleProductUpdateVariables),
    UpdateMetadata(UpdateMetadataVariables),
    UpdatePrivateMetadata(UpdateMetadataVariables),
    CreateProductImage(ProductImageCreateVariables),
    ReorderProductImages(ProductImageReorderVariables),
}

impl Recorded {
    /// The GraphQL operation this call maps to.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::UpdateProduct(_) => "ProductUpdate",
            Self::UpdateSimpleProduct(_) => "SimpleProductUpdate",
            Self::UpdateMetadata(_) => "UpdateMetadata",
            Self::UpdatePrivateMetadata(_) => "UpdatePrivateMetadata",
            Self::CreateProductImage(_) => "ProductImageCreate",
            Self::ReorderProductImages(_) => "ProductImageReorder",
        }
    }
}

/// Canned answers for [`ScriptedApi`].
#[derive(Debug, Default)]
pub struct Script {
    /// Errors returned by `ProductUpdate`.
    pub product_errors: Vec<MutationError>,
    /// Result returned by `SimpleProductUpdate`.
    pub simple_result: SimpleProductUpdateResult,
    /// Make metadata and image calls fail at the transport level.
    pub fail_background: bool,
    /// Park metadata and image calls until [`ScriptedApi::release`].
    pub hold_background: bool,
}

/// Recording catalog API with scripted responses.
#[derive(Debug)]
pub struct ScriptedApi {
    script: Script,
    calls: Mutex<Vec<Recorded>>,
    gate: Semaphore,
}

impl ScriptedApi {
    /// An API that accepts every mutation.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Self::scripted(Script::default())
    }

    /// An API that answers from `script`.
    #[must_use]
    pub fn scripted(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
            gate: Semaphore::new(0),
        })
    }

    /// Everything received so far, in arrival order.
    pub async fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().await.clone()
    }

    /// Names of the operations received so far.
    pub async fn operations(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .await
            .iter()
            .map(Recorded::operation)
            .collect()
    }

    /// Let parked background calls finish.
    pub fn release(&self) {
        self.gate.add_permits(RELEASE_PERMITS);
    }

    async fn record(&self, call: Recorded) {
        self.calls.lock().await.push(call);
    }

    async fn background(&self, call: Recorded) -> Result<Vec<MutationError>, ApiError> {
        if self.script.hold_background {
            let _permit = self.gate.acquire().await.ok();
        }
        let operation = call.operation();
        self.record(call).await;

        if self.script.fail_background {
            return Err(ApiError::graphql(format!("{operation} failed")));
        }
        Ok(Vec::new())
    }
}

impl ProductUpdateApi for ScriptedApi {
    async fn update_product(
        &self,
        variables: ProductUpdateVariables,
    ) -> Result<ProductUpdateResult, ApiError> {
        self.record(Recorded::UpdateProduct(variables)).await;
        Ok(ProductUpdateResult {
            errors: self.script.product_errors.clone(),
        })
    }

    async fn update_simple_product(
        &self,
        variables: SimpleProductUpdateVariables,
    ) -> Result<SimpleProductUpdateResult, ApiError> {
        self.record(Recorded::UpdateSimpleProduct(variables)).await;
        Ok(self.script.simple_result.clone())
    }
}

impl MetadataApi for ScriptedApi {
    async fn update_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.background(Recorded::UpdateMetadata(variables)).await
    }

    async fn update_private_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.background(Recorded::UpdatePrivateMetadata(variables))
            .await
    }
}

impl ProductImageApi for ScriptedApi {
    async fn create_product_image(
        &self,
        variables: ProductImageCreateVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.background(Recorded::CreateProductImage(variables))
            .await
    }

    async fn reorder_product_images(
        &self,
        variables: ProductImageReorderVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        self.background(Recorded::ReorderProductImages(variables))
            .await
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A product whose variants are edited on their own screens.
#[must_use]
pub fn product_with_variants() -> ProductDetails {
    ProductDetails {
        id: ProductId::new("UHJvZHVjdDo3Mg=="),
        has_variants: true,
        variants: vec![
            VariantSummary {
                id: VariantId::new("UHJvZHVjdFZhcmlhbnQ6MjAz"),
            },
            VariantSummary {
                id: VariantId::new("UHJvZHVjdFZhcmlhbnQ6MjA0"),
            },
        ],
        images: images(&["img-a", "img-b", "img-c", "img-d"]),
        metadata: vec![
            MetadataEntry::new("a", "1"),
            MetadataEntry::new("b", "2"),
        ],
        private_metadata: vec![MetadataEntry::new("supplier", "acme")],
    }
}

/// A product with one implicit variant.
#[must_use]
pub fn simple_product() -> ProductDetails {
    ProductDetails {
        id: ProductId::new("UHJvZHVjdDo3Mw=="),
        has_variants: false,
        variants: vec![VariantSummary {
            id: VariantId::new("UHJvZHVjdFZhcmlhbnQ6MzAx"),
        }],
        images: vec![],
        metadata: vec![],
        private_metadata: vec![],
    }
}

/// Images with the given IDs, in order.
#[must_use]
pub fn images(ids: &[&str]) -> Vec<ProductImage> {
    ids.iter()
        .map(|id| ProductImage {
            id: ImageId::new(*id),
            url: Some(format!("https://media.test/{id}.png")),
        })
        .collect()
}
