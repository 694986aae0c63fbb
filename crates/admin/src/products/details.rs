//! Product snapshot the handlers work against.

use catalog_console_core::{ImageId, MetadataEntry, ProductId, VariantId};
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// A product variant, reduced to what the handlers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSummary {
    /// Variant ID.
    pub id: VariantId,
}

/// A product image, reduced to what the handlers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image ID.
    pub id: ImageId,
    /// Image URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// The product as last fetched for the edit screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    /// Product ID.
    pub id: ProductId,
    /// Whether the product type manages variants separately.
    pub has_variants: bool,
    /// Variants in display order.
    #[serde(default)]
    pub variants: Vec<VariantSummary>,
    /// Images in display order.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Public metadata.
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
    /// Private metadata.
    #[serde(default)]
    pub private_metadata: Vec<MetadataEntry>,
}

/// How a product's variant data is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    /// Variants are edited on their own screens; the product form only
    /// touches product fields.
    WithVariants,
    /// The product has one implicit variant whose SKU and stock are edited
    /// on the product form.
    Simple {
        /// The product's only variant.
        variant_id: VariantId,
    },
}

impl ProductDetails {
    /// Classify the product.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MissingVariant`] for a product without
    /// separately managed variants that has no variant at all.
    pub fn kind(&self) -> Result<ProductKind, HandlerError> {
        if self.has_variants {
            return Ok(ProductKind::WithVariants);
        }

        self.variants
            .first()
            .map(|variant| ProductKind::Simple {
                variant_id: variant.id.clone(),
            })
            .ok_or_else(|| HandlerError::MissingVariant(self.id.clone()))
    }

    /// Image IDs in display order.
    #[must_use]
    pub fn image_ids(&self) -> Vec<ImageId> {
        self.images.iter().map(|image| image.id.clone()).collect()
    }
}
