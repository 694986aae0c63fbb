//! GraphQL mutation documents for the catalog API.
//!
//! Each operation implements `graphql_client::GraphQLQuery` by hand: the
//! variables are the typed structs from [`crate::dashboard::types`] and the
//! response data is declared next to the document. Every payload aliases
//! its error field to `errors` so they all decode into `ErrorsPayload`.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::dashboard::types::{
    ErrorsPayload, ProductImageReorderVariables, ProductUpdateVariables,
    SimpleProductUpdateVariables, UpdateMetadataVariables,
};

macro_rules! mutation {
    ($name:ident, $module:ident, $variables:ty) => {
        pub struct $name;

        impl GraphQLQuery for $name {
            type Variables = $variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $module::QUERY,
                    operation_name: $module::OPERATION_NAME,
                }
            }
        }
    };
}

// =============================================================================
// Product mutations
// =============================================================================

pub mod product_update {
    use super::{Deserialize, ErrorsPayload};

    pub const OPERATION_NAME: &str = "ProductUpdate";
    pub const QUERY: &str = r"
mutation ProductUpdate(
  $id: ID!
  $attributes: [AttributeValueInput]
  $basePrice: PositiveDecimal
  $category: ID
  $chargeTaxes: Boolean!
  $collections: [ID]
  $descriptionJson: JSONString
  $isPublished: Boolean!
  $name: String
  $publicationDate: Date
  $seo: SeoInput
) {
  productUpdate(
    id: $id
    input: {
      attributes: $attributes
      basePrice: $basePrice
      category: $category
      chargeTaxes: $chargeTaxes
      collections: $collections
      descriptionJson: $descriptionJson
      isPublished: $isPublished
      name: $name
      publicationDate: $publicationDate
      seo: $seo
    }
  ) {
    errors: productErrors { field code message }
  }
}
";

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_update: Option<ErrorsPayload>,
    }
}

mutation!(ProductUpdate, product_update, ProductUpdateVariables);

pub mod simple_product_update {
    use super::{Deserialize, ErrorsPayload};

    pub const OPERATION_NAME: &str = "SimpleProductUpdate";
    pub const QUERY: &str = r"
mutation SimpleProductUpdate(
  $id: ID!
  $attributes: [AttributeValueInput]
  $basePrice: PositiveDecimal
  $category: ID
  $chargeTaxes: Boolean!
  $collections: [ID]
  $descriptionJson: JSONString
  $isPublished: Boolean!
  $name: String
  $publicationDate: Date
  $seo: SeoInput
  $productVariantId: ID!
  $productVariantInput: ProductVariantInput!
  $addStocks: [StockInput!]!
  $deleteStocks: [ID!]!
  $updateStocks: [StockInput!]!
  $weight: WeightScalar
) {
  productUpdate(
    id: $id
    input: {
      attributes: $attributes
      basePrice: $basePrice
      category: $category
      chargeTaxes: $chargeTaxes
      collections: $collections
      descriptionJson: $descriptionJson
      isPublished: $isPublished
      name: $name
      publicationDate: $publicationDate
      seo: $seo
      weight: $weight
    }
  ) {
    errors: productErrors { field code message }
  }
  productVariantUpdate(id: $productVariantId, input: $productVariantInput) {
    errors: productErrors { field code message }
  }
  productVariantStocksCreate(stocks: $addStocks, variantId: $productVariantId) {
    errors: bulkStockErrors { field code message }
  }
  productVariantStocksDelete(warehouseIds: $deleteStocks, variantId: $productVariantId) {
    errors: stockErrors { field code message }
  }
  productVariantStocksUpdate(stocks: $updateStocks, variantId: $productVariantId) {
    errors: bulkStockErrors { field code message }
  }
}
";

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_update: Option<ErrorsPayload>,
        pub product_variant_update: Option<ErrorsPayload>,
        pub product_variant_stocks_create: Option<ErrorsPayload>,
        pub product_variant_stocks_delete: Option<ErrorsPayload>,
        pub product_variant_stocks_update: Option<ErrorsPayload>,
    }
}

mutation!(
    SimpleProductUpdate,
    simple_product_update,
    SimpleProductUpdateVariables
);

// =============================================================================
// Metadata mutations
// =============================================================================

pub mod update_metadata {
    use super::{Deserialize, ErrorsPayload};

    pub const OPERATION_NAME: &str = "UpdateMetadata";
    pub const QUERY: &str = r"
mutation UpdateMetadata($id: ID!, $input: [MetadataInput!]!, $keysToDelete: [String!]!) {
  updateMetadata(id: $id, input: $input) {
    errors: metadataErrors { field code message }
  }
  deleteMetadata(id: $id, keys: $keysToDelete) {
    errors: metadataErrors { field code message }
  }
}
";

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_metadata: Option<ErrorsPayload>,
        pub delete_metadata: Option<ErrorsPayload>,
    }
}

mutation!(UpdateMetadata, update_metadata, UpdateMetadataVariables);

pub mod update_private_metadata {
    use super::{Deserialize, ErrorsPayload};

    pub const OPERATION_NAME: &str = "UpdatePrivateMetadata";
    pub const QUERY: &str = r"
mutation UpdatePrivateMetadata($id: ID!, $input: [MetadataInput!]!, $keysToDelete: [String!]!) {
  updatePrivateMetadata(id: $id, input: $input) {
    errors: metadataErrors { field code message }
  }
  deletePrivateMetadata(id: $id, keys: $keysToDelete) {
    errors: metadataErrors { field code message }
  }
}
";

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_private_metadata: Option<ErrorsPayload>,
        pub delete_private_metadata: Option<ErrorsPayload>,
    }
}

mutation!(
    UpdatePrivateMetadata,
    update_private_metadata,
    UpdateMetadataVariables
);

// =============================================================================
// Media mutations
// =============================================================================

pub mod product_image_create {
    use catalog_console_core::ProductId;

    use super::{Deserialize, ErrorsPayload, Serialize};

    pub const OPERATION_NAME: &str = "ProductImageCreate";
    pub const QUERY: &str = r"
mutation ProductImageCreate($product: ID!, $image: Upload!, $alt: String) {
  productImageCreate(input: { alt: $alt, image: $image, product: $product }) {
    errors: productErrors { field code message }
  }
}
";

    /// Path of the upload placeholder inside `operations`.
    pub const IMAGE_VARIABLE_PATH: &str = "variables.image";

    /// Operation variables as sent in the multipart `operations` field.
    ///
    /// `image` is always `None`; the file itself travels as a separate
    /// multipart part mapped onto [`IMAGE_VARIABLE_PATH`].
    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub alt: String,
        pub image: Option<String>,
        pub product: ProductId,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_image_create: Option<ErrorsPayload>,
    }
}

mutation!(
    ProductImageCreate,
    product_image_create,
    product_image_create::Variables
);

pub mod product_image_reorder {
    use super::{Deserialize, ErrorsPayload};

    pub const OPERATION_NAME: &str = "ProductImageReorder";
    pub const QUERY: &str = r"
mutation ProductImageReorder($productId: ID!, $imagesIds: [ID]!) {
  productImageReorder(productId: $productId, imagesIds: $imagesIds) {
    errors: productErrors { field code message }
  }
}
";

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_image_reorder: Option<ErrorsPayload>,
    }
}

mutation!(
    ProductImageReorder,
    product_image_reorder,
    ProductImageReorderVariables
);
