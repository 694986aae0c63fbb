//! Product update variables and results.

use catalog_console_core::{
    AttributeId, CategoryId, CollectionId, ProductId, VariantId, WarehouseId,
};
use rust_decimal::Decimal;
use serde::Serialize;

use super::common::MutationError;

// =============================================================================
// Inputs
// =============================================================================

/// Values assigned to one product attribute.
///
/// An empty `values` list means "no value assigned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValueInput {
    /// Attribute ID.
    pub id: AttributeId,
    /// Selected value slugs or free-text values.
    pub values: Vec<String>,
}

/// Search engine metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SeoInput {
    /// Meta description.
    pub description: String,
    /// Page title.
    pub title: String,
}

/// Stock quantity of a variant in one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockInput {
    /// Warehouse holding the stock.
    pub warehouse: WarehouseId,
    /// Quantity on hand.
    pub quantity: i64,
}

/// Variant fields editable from the simple-product form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantInput {
    /// Stock keeping unit.
    pub sku: String,
    /// Whether stock levels are tracked for the variant.
    pub track_inventory: bool,
}

// =============================================================================
// Variables
// =============================================================================

/// Variables of the `ProductUpdate` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateVariables {
    /// Product being updated.
    pub id: ProductId,
    /// Attribute assignments.
    pub attributes: Vec<AttributeValueInput>,
    /// Base price; `None` clears it.
    pub base_price: Option<Decimal>,
    /// Category the product belongs to.
    pub category: Option<CategoryId>,
    /// Whether taxes are charged.
    pub charge_taxes: bool,
    /// Collections the product belongs to.
    pub collections: Vec<CollectionId>,
    /// Rich-text description serialized as a JSON string.
    pub description_json: String,
    /// Whether the product is published.
    pub is_published: bool,
    /// Product name.
    pub name: String,
    /// Publication date (`YYYY-MM-DD`); `None` publishes immediately.
    pub publication_date: Option<String>,
    /// Search engine metadata.
    pub seo: SeoInput,
}

/// Variables of the `SimpleProductUpdate` mutation.
///
/// A simple product edits its only variant's SKU and stock levels from the
/// product form, so the product fields are sent together with the variant
/// and stock changes in a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleProductUpdateVariables {
    #[serde(flatten)]
    pub product: ProductUpdateVariables,
    /// Stocks to create.
    pub add_stocks: Vec<StockInput>,
    /// Warehouses whose stock is removed.
    pub delete_stocks: Vec<WarehouseId>,
    /// Stocks to update.
    pub update_stocks: Vec<StockInput>,
    /// The product's only variant.
    pub product_variant_id: VariantId,
    /// Variant fields.
    pub product_variant_input: ProductVariantInput,
    /// Shipping weight; `None` clears it.
    pub weight: Option<Decimal>,
}

// =============================================================================
// Results
// =============================================================================

/// Result of the `ProductUpdate` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductUpdateResult {
    /// Errors reported by `productUpdate`.
    pub errors: Vec<MutationError>,
}

/// Result of the `SimpleProductUpdate` mutation, one error list per
/// sub-mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleProductUpdateResult {
    /// Errors reported by `productUpdate`.
    pub product_update: Vec<MutationError>,
    /// Errors reported by `productVariantStocksCreate`.
    pub stocks_create: Vec<MutationError>,
    /// Errors reported by `productVariantStocksDelete`.
    pub stocks_delete: Vec<MutationError>,
    /// Errors reported by `productVariantStocksUpdate`.
    pub stocks_update: Vec<MutationError>,
    /// Errors reported by `productVariantUpdate`.
    pub variant_update: Vec<MutationError>,
}

impl SimpleProductUpdateResult {
    /// All errors concatenated: product, stocks create, stocks delete,
    /// stocks update, variant.
    #[must_use]
    pub fn into_errors(self) -> Vec<MutationError> {
        let mut errors = self.product_update;
        errors.extend(self.stocks_create);
        errors.extend(self.stocks_delete);
        errors.extend(self.stocks_update);
        errors.extend(self.variant_update);
        errors
    }
}
