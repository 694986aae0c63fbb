//! Product form payload and its mapping onto mutation variables.

use catalog_console_core::{
    AttributeId, CategoryId, CollectionId, DecimalSeparator, MetadataEntry, ProductId, VariantId,
    WarehouseId, normalize_decimal, normalize_weight,
};
use serde::{Deserialize, Serialize};

use crate::dashboard::{
    AttributeValueInput, ProductUpdateVariables, ProductVariantInput, SeoInput,
    SimpleProductUpdateVariables, StockInput,
};
use crate::error::HandlerError;

/// Attribute selection as held by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSelection {
    /// Attribute ID.
    pub id: AttributeId,
    /// Selected values; `[""]` means nothing is selected.
    #[serde(default)]
    pub value: Vec<String>,
}

/// One row of a stock formset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsetStock {
    /// Warehouse the row refers to.
    pub id: WarehouseId,
    /// Quantity as typed.
    pub value: String,
}

/// Everything the product update form submits.
///
/// Fields mirror the form inputs; numbers arrive as typed text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateForm {
    pub name: String,
    #[serde(default)]
    pub base_price: String,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub collections: Vec<CollectionId>,
    #[serde(default)]
    pub is_published: bool,
    /// `YYYY-MM-DD`, or empty to publish immediately.
    #[serde(default)]
    pub publication_date: String,
    #[serde(default)]
    pub charge_taxes: bool,
    #[serde(default)]
    pub seo_title: String,
    #[serde(default)]
    pub seo_description: String,
    /// Rich-text editor state.
    #[serde(default)]
    pub description: serde_json::Value,
    #[serde(default)]
    pub attributes: Vec<AttributeSelection>,

    // Simple products only
    #[serde(default)]
    pub add_stocks: Vec<FormsetStock>,
    #[serde(default)]
    pub remove_stocks: Vec<WarehouseId>,
    #[serde(default)]
    pub update_stocks: Vec<FormsetStock>,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub track_inventory: bool,

    /// Full replacement for public metadata; `None` leaves it untouched.
    #[serde(default)]
    pub metadata: Option<Vec<MetadataEntry>>,
    /// Full replacement for private metadata; `None` leaves it untouched.
    #[serde(default)]
    pub private_metadata: Option<Vec<MetadataEntry>>,
}

impl ProductUpdateForm {
    /// Variables shared by both update mutations.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::InvalidNumber`] if the base price is not a number.
    pub fn product_variables(
        &self,
        id: ProductId,
        separator: DecimalSeparator,
    ) -> Result<ProductUpdateVariables, HandlerError> {
        Ok(ProductUpdateVariables {
            id,
            attributes: self
                .attributes
                .iter()
                .map(|attribute| AttributeValueInput {
                    id: attribute.id.clone(),
                    values: attribute_values(&attribute.value),
                })
                .collect(),
            base_price: normalize_decimal(&self.base_price, separator)?,
            category: self.category.clone(),
            charge_taxes: self.charge_taxes,
            collections: self.collections.clone(),
            description_json: self.description.to_string(),
            is_published: self.is_published,
            name: self.name.clone(),
            publication_date: publication_date(&self.publication_date),
            seo: SeoInput {
                description: self.seo_description.clone(),
                title: self.seo_title.clone(),
            },
        })
    }

    /// Extend the shared variables with the simple product's variant and
    /// stock changes.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::InvalidNumber`] for a bad weight and
    /// [`HandlerError::InvalidStockQuantity`] for a bad formset row.
    pub fn simple_product_variables(
        &self,
        product: ProductUpdateVariables,
        variant_id: VariantId,
        separator: DecimalSeparator,
    ) -> Result<SimpleProductUpdateVariables, HandlerError> {
        Ok(SimpleProductUpdateVariables {
            product,
            add_stocks: self
                .add_stocks
                .iter()
                .map(stock_input)
                .collect::<Result<_, _>>()?,
            delete_stocks: self.remove_stocks.clone(),
            update_stocks: self
                .update_stocks
                .iter()
                .map(stock_input)
                .collect::<Result<_, _>>()?,
            product_variant_id: variant_id,
            product_variant_input: ProductVariantInput {
                sku: self.sku.clone(),
                track_inventory: self.track_inventory,
            },
            weight: normalize_weight(&self.weight, separator)?,
        })
    }
}

/// A lone empty string is how the form says "no value".
fn attribute_values(values: &[String]) -> Vec<String> {
    match values {
        [only] if only.is_empty() => Vec::new(),
        _ => values.to_vec(),
    }
}

fn publication_date(date: &str) -> Option<String> {
    (!date.is_empty()).then(|| date.to_string())
}

fn stock_input(stock: &FormsetStock) -> Result<StockInput, HandlerError> {
    let quantity = stock
        .value
        .trim()
        .parse::<i64>()
        .map_err(|_| HandlerError::InvalidStockQuantity {
            warehouse: stock.id.clone(),
            value: stock.value.clone(),
        })?;

    Ok(StockInput {
        warehouse: stock.id.clone(),
        quantity,
    })
}
