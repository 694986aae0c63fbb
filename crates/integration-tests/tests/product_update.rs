//! Integration tests for saving the product form.
//!
//! These tests run [`UpdateHandler`] against a scripted catalog API and
//! check which mutations go out, with what variables, and in what order.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::str::FromStr;

use catalog_console_admin::dashboard::{MutationError, SimpleProductUpdateResult};
use catalog_console_admin::error::HandlerError;
use catalog_console_admin::products::{
    AttributeSelection, FormsetStock, ProductKind, ProductUpdateForm, UpdateHandler,
    UpdateOutcome, wait_for,
};
use catalog_console_core::{
    AttributeId, DecimalSeparator, MetadataEntry, VariantId, WarehouseId,
};
use catalog_console_integration_tests::{
    Recorded, Script, ScriptedApi, product_with_variants, simple_product,
};
use rust_decimal::Decimal;
use serde_json::json;

fn form() -> ProductUpdateForm {
    ProductUpdateForm {
        name: "Linen Shirt".to_string(),
        base_price: "49.90".to_string(),
        is_published: true,
        charge_taxes: true,
        seo_title: "Linen Shirt".to_string(),
        description: json!({ "blocks": [] }),
        attributes: vec![
            AttributeSelection {
                id: AttributeId::new("attr-color"),
                value: vec![String::new()],
            },
            AttributeSelection {
                id: AttributeId::new("attr-size"),
                value: vec!["m".to_string(), "l".to_string()],
            },
        ],
        ..ProductUpdateForm::default()
    }
}

fn error(field: &str) -> MutationError {
    MutationError::new(Some(field), Some("INVALID"), None)
}

async fn settle(outcome: UpdateOutcome) {
    for sync in outcome.metadata_sync {
        wait_for(sync.task).await.unwrap();
    }
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_variant_product_sends_only_product_update() {
    let api = ScriptedApi::new();
    let handler = UpdateHandler::new(product_with_variants(), api.clone()).unwrap();
    assert_eq!(handler.kind(), &ProductKind::WithVariants);

    let outcome = handler.submit(form()).await.unwrap();
    assert!(outcome.is_success());
    assert!(outcome.metadata_sync.is_empty());

    let calls = api.calls().await;
    assert_eq!(calls.len(), 1);
    let Recorded::UpdateProduct(variables) = &calls[0] else {
        panic!("expected ProductUpdate, got {:?}", calls[0]);
    };
    assert_eq!(variables.id, product_with_variants().id);
    assert_eq!(variables.name, "Linen Shirt");
    assert_eq!(variables.base_price, Some(Decimal::from_str("49.90").unwrap()));
    assert!(variables.attributes[0].values.is_empty());
    assert_eq!(variables.attributes[1].values, vec!["m", "l"]);
    assert_eq!(variables.publication_date, None);
}

#[tokio::test]
async fn test_simple_product_sends_variant_and_stock_changes() {
    let api = ScriptedApi::new();
    let handler = UpdateHandler::new(simple_product(), api.clone()).unwrap();

    let outcome = handler
        .submit(ProductUpdateForm {
            sku: "LIN-001".to_string(),
            track_inventory: true,
            weight: "0.4".to_string(),
            add_stocks: vec![FormsetStock {
                id: WarehouseId::new("wh-berlin"),
                value: "12".to_string(),
            }],
            remove_stocks: vec![WarehouseId::new("wh-paris")],
            update_stocks: vec![FormsetStock {
                id: WarehouseId::new("wh-oslo"),
                value: "3".to_string(),
            }],
            ..form()
        })
        .await
        .unwrap();
    assert!(outcome.is_success());

    assert_eq!(api.operations().await, vec!["SimpleProductUpdate"]);
    let calls = api.calls().await;
    let Recorded::UpdateSimpleProduct(variables) = &calls[0] else {
        panic!("expected SimpleProductUpdate");
    };
    assert_eq!(
        variables.product_variant_id,
        VariantId::new("UHJvZHVjdFZhcmlhbnQ6MzAx")
    );
    assert_eq!(variables.product_variant_input.sku, "LIN-001");
    assert_eq!(variables.add_stocks[0].quantity, 12);
    assert_eq!(variables.delete_stocks, vec![WarehouseId::new("wh-paris")]);
    assert_eq!(variables.update_stocks[0].warehouse, WarehouseId::new("wh-oslo"));
    assert_eq!(variables.weight, Some(Decimal::from_str("0.4").unwrap()));
    assert_eq!(variables.product.name, "Linen Shirt");
}

#[tokio::test]
async fn test_simple_product_variables_wire_shape() {
    let api = ScriptedApi::new();
    let handler = UpdateHandler::new(simple_product(), api.clone()).unwrap();
    handler.submit(form()).await.unwrap();

    let calls = api.calls().await;
    let Recorded::UpdateSimpleProduct(variables) = &calls[0] else {
        panic!("expected SimpleProductUpdate");
    };
    let value = serde_json::to_value(variables).unwrap();

    // Product fields sit next to the variant fields, not under a key.
    assert_eq!(value["id"], json!("UHJvZHVjdDo3Mw=="));
    assert_eq!(value["basePrice"], json!("49.9"));
    assert_eq!(value["productVariantId"], json!("UHJvZHVjdFZhcmlhbnQ6MzAx"));
    assert_eq!(value["weight"], json!(null));
    assert!(value.get("product").is_none());
}

#[tokio::test]
async fn test_comma_separator_prices() {
    let api = ScriptedApi::new();
    let handler = UpdateHandler::new(simple_product(), api.clone())
        .unwrap()
        .with_decimal_separator(DecimalSeparator::Comma);

    handler
        .submit(ProductUpdateForm {
            base_price: "1.299,00".to_string(),
            weight: "2,5".to_string(),
            ..form()
        })
        .await
        .unwrap();

    let calls = api.calls().await;
    let Recorded::UpdateSimpleProduct(variables) = &calls[0] else {
        panic!("expected SimpleProductUpdate");
    };
    assert_eq!(
        variables.product.base_price,
        Some(Decimal::from_str("1299").unwrap())
    );
    assert_eq!(variables.weight, Some(Decimal::from_str("2.5").unwrap()));
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_simple_product_error_order() {
    let api = ScriptedApi::scripted(Script {
        simple_result: SimpleProductUpdateResult {
            product_update: vec![error("name")],
            stocks_create: vec![error("addStocks")],
            stocks_delete: vec![error("removeStocks")],
            stocks_update: vec![error("updateStocks")],
            variant_update: vec![error("sku")],
        },
        ..Script::default()
    });
    let handler = UpdateHandler::new(simple_product(), api.clone()).unwrap();

    let outcome = handler.submit(form()).await.unwrap();

    let fields: Vec<_> = outcome
        .errors
        .iter()
        .map(|e| e.field.as_deref().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["name", "addStocks", "removeStocks", "updateStocks", "sku"]
    );
}

#[tokio::test]
async fn test_errors_suppress_metadata_sync() {
    let api = ScriptedApi::scripted(Script {
        product_errors: vec![error("slug")],
        ..Script::default()
    });
    let handler = UpdateHandler::new(product_with_variants(), api.clone()).unwrap();

    let outcome = handler
        .submit(ProductUpdateForm {
            metadata: Some(vec![MetadataEntry::new("a", "1")]),
            private_metadata: Some(vec![]),
            ..form()
        })
        .await
        .unwrap();

    assert_eq!(outcome.errors, vec![error("slug")]);
    assert!(outcome.metadata_sync.is_empty());
    tokio::task::yield_now().await;
    assert_eq!(api.operations().await, vec!["ProductUpdate"]);
}

#[tokio::test]
async fn test_invalid_input_sends_nothing() {
    let api = ScriptedApi::new();
    let handler = UpdateHandler::new(simple_product(), api.clone()).unwrap();

    let err = handler
        .submit(ProductUpdateForm {
            update_stocks: vec![FormsetStock {
                id: WarehouseId::new("wh-oslo"),
                value: "a few".to_string(),
            }],
            ..form()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        HandlerError::InvalidStockQuantity { ref value, .. } if value == "a few"
    ));
    assert!(api.calls().await.is_empty());
}

#[test]
fn test_simple_product_without_variant() {
    let mut product = simple_product();
    product.variants.clear();

    let err = UpdateHandler::new(product, ScriptedApi::new()).unwrap_err();
    assert!(matches!(err, HandlerError::MissingVariant(_)));
}

// =============================================================================
// Metadata
// =============================================================================

#[tokio::test]
async fn test_metadata_sync_deletes_removed_keys() {
    let api = ScriptedApi::new();
    let handler = UpdateHandler::new(product_with_variants(), api.clone()).unwrap();

    let outcome = handler
        .submit(ProductUpdateForm {
            metadata: Some(vec![MetadataEntry::new("a", "10")]),
            private_metadata: Some(vec![
                MetadataEntry::new("supplier", "globex"),
                MetadataEntry::new("lead_time", "5d"),
            ]),
            ..form()
        })
        .await
        .unwrap();
    settle(outcome).await;

    let calls = api.calls().await;
    assert_eq!(calls[0].operation(), "ProductUpdate");

    let public = calls
        .iter()
        .find_map(|call| match call {
            Recorded::UpdateMetadata(v) => Some(v),
            _ => None,
        })
        .unwrap();
    assert_eq!(public.id, product_with_variants().id);
    assert_eq!(public.input, vec![MetadataEntry::new("a", "10")]);
    assert_eq!(public.keys_to_delete, vec!["b"]);

    let private = calls
        .iter()
        .find_map(|call| match call {
            Recorded::UpdatePrivateMetadata(v) => Some(v),
            _ => None,
        })
        .unwrap();
    assert_eq!(private.input.len(), 2);
    assert!(private.keys_to_delete.is_empty());
}

#[tokio::test]
async fn test_submit_does_not_wait_for_metadata() {
    let api = ScriptedApi::scripted(Script {
        hold_background: true,
        ..Script::default()
    });
    let handler = UpdateHandler::new(product_with_variants(), api.clone()).unwrap();

    let outcome = handler
        .submit(ProductUpdateForm {
            metadata: Some(vec![]),
            private_metadata: Some(vec![]),
            ..form()
        })
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.metadata_sync.len(), 2);
    assert_eq!(api.operations().await, vec!["ProductUpdate"]);

    api.release();
    settle(outcome).await;

    let mut operations = api.operations().await;
    operations.sort_unstable();
    assert_eq!(
        operations,
        vec!["ProductUpdate", "UpdateMetadata", "UpdatePrivateMetadata"]
    );
}

#[tokio::test]
async fn test_metadata_failure_does_not_fail_submit() {
    let api = ScriptedApi::scripted(Script {
        fail_background: true,
        ..Script::default()
    });
    let handler = UpdateHandler::new(product_with_variants(), api.clone()).unwrap();

    let outcome = handler
        .submit(ProductUpdateForm {
            metadata: Some(vec![]),
            ..form()
        })
        .await
        .unwrap();
    assert!(outcome.is_success());

    let mut syncs = outcome.metadata_sync;
    let sync = syncs.remove(0);
    assert_eq!(sync.operation, "updateMetadata");
    let err = wait_for(sync.task).await.unwrap_err();
    assert!(matches!(err, HandlerError::Api(_)));
}
