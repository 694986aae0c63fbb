//! Metadata operations for the catalog API.

use tracing::instrument;

use super::{
    DashboardClient, payload_errors,
    mutations::{UpdateMetadata, UpdatePrivateMetadata},
};
use crate::dashboard::{ApiError, MutationError, UpdateMetadataVariables};
use crate::products::MetadataApi;

impl MetadataApi for DashboardClient {
    /// Upsert public metadata and delete removed keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or either payload is missing.
    #[instrument(
        skip(self, variables),
        fields(id = %variables.id, upserts = variables.input.len(), deletes = variables.keys_to_delete.len())
    )]
    async fn update_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        let response = self.execute::<UpdateMetadata>(variables).await?;

        let mut errors = payload_errors(response.update_metadata, "updateMetadata")?;
        errors.extend(payload_errors(response.delete_metadata, "deleteMetadata")?);
        Ok(errors)
    }

    /// Upsert private metadata and delete removed keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or either payload is missing.
    #[instrument(
        skip(self, variables),
        fields(id = %variables.id, upserts = variables.input.len(), deletes = variables.keys_to_delete.len())
    )]
    async fn update_private_metadata(
        &self,
        variables: UpdateMetadataVariables,
    ) -> Result<Vec<MutationError>, ApiError> {
        let response = self.execute::<UpdatePrivateMetadata>(variables).await?;

        let mut errors = payload_errors(response.update_private_metadata, "updatePrivateMetadata")?;
        errors.extend(payload_errors(
            response.delete_private_metadata,
            "deletePrivateMetadata",
        )?);
        Ok(errors)
    }
}
