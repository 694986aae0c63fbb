//! `update` subcommand.

use std::path::Path;
use std::sync::Arc;

use catalog_console_admin::config::ConsoleConfig;
use catalog_console_admin::dashboard::DashboardClient;
use catalog_console_admin::products::{
    MetadataSync, ProductDetails, ProductUpdateForm, UpdateHandler, wait_for,
};

use super::{CliError, ensure_clean, read_json};

/// Save the product form and wait for metadata sync.
pub async fn update(
    client: DashboardClient,
    config: &ConsoleConfig,
    product: &Path,
    form: &Path,
) -> Result<(), CliError> {
    let product: ProductDetails = read_json(product)?;
    let form: ProductUpdateForm = read_json(form)?;
    let product_id = product.id.clone();

    let handler = UpdateHandler::new(product, Arc::new(client))?
        .with_decimal_separator(config.decimal_separator);
    tracing::info!(product_id = %product_id, kind = ?handler.kind(), "Saving product");

    let outcome = handler.submit(form).await?;
    ensure_clean("productUpdate", &outcome.errors)?;

    let syncs = outcome.metadata_sync.len();
    settle_metadata(outcome.metadata_sync).await?;

    tracing::info!(product_id = %product_id, metadata_syncs = syncs, "Product saved");
    Ok(())
}

/// Wait for every metadata sync, then report the first failure.
///
/// Every task is awaited before any failure is reported.
async fn settle_metadata(syncs: Vec<MetadataSync>) -> Result<(), CliError> {
    let mut results = Vec::with_capacity(syncs.len());
    for sync in syncs {
        results.push((sync.operation, wait_for(sync.task).await));
    }

    let mut first_failure = None;
    for (operation, result) in results {
        let outcome = match result {
            Ok(errors) => ensure_clean(operation, &errors),
            Err(e) => {
                tracing::error!(operation, error = %e, "Metadata sync failed");
                Err(e.into())
            }
        };
        if let Err(e) = outcome {
            first_failure.get_or_insert(e);
        }
    }

    first_failure.map_or(Ok(()), Err)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use catalog_console_admin::dashboard::{ApiError, MutationError};

    use super::*;

    #[tokio::test]
    async fn test_settle_waits_for_every_sync() {
        let private_done = Arc::new(AtomicBool::new(false));
        let done = Arc::clone(&private_done);

        let syncs = vec![
            MetadataSync {
                operation: "updateMetadata",
                task: tokio::spawn(async {
                    Err::<Vec<MutationError>, _>(ApiError::graphql("metadata rejected"))
                }),
            },
            MetadataSync {
                operation: "updatePrivateMetadata",
                task: tokio::spawn(async move {
                    tokio::task::yield_now().await;
                    done.store(true, Ordering::SeqCst);
                    Ok::<_, ApiError>(Vec::new())
                }),
            },
        ];

        let err = settle_metadata(syncs).await.unwrap_err();

        assert!(matches!(err, CliError::Handler(_)));
        assert!(private_done.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_settle_names_private_metadata_failures() {
        let syncs = vec![
            MetadataSync {
                operation: "updateMetadata",
                task: tokio::spawn(async { Ok::<_, ApiError>(Vec::new()) }),
            },
            MetadataSync {
                operation: "updatePrivateMetadata",
                task: tokio::spawn(async {
                    Ok::<_, ApiError>(vec![MutationError::new(
                        Some("key"),
                        Some("REQUIRED"),
                        None,
                    )])
                }),
            },
        ];

        let err = settle_metadata(syncs).await.unwrap_err();

        assert!(matches!(
            err,
            CliError::Mutation {
                operation: "updatePrivateMetadata",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_settle_without_syncs() {
        assert!(settle_metadata(Vec::new()).await.is_ok());
    }
}
