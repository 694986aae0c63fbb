//! Metadata update variables.

use catalog_console_core::{MetadataEntry, ProductId};
use serde::Serialize;

/// Variables of the `UpdateMetadata` and `UpdatePrivateMetadata` mutations.
///
/// `input` is upserted as-is and `keys_to_delete` removed, in one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetadataVariables {
    /// Object owning the metadata.
    pub id: ProductId,
    /// Full replacement sequence.
    pub input: Vec<MetadataEntry>,
    /// Keys present before and missing from `input`.
    pub keys_to_delete: Vec<String>,
}
