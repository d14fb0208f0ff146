//! Catalog listings against a scripted Admin API

mod common;

use anyhow::Result;
use common::*;
use serde_json::json;
use shop_admin_cli::catalog::{fetch_collections, fetch_products};

#[tokio::test]
async fn test_fetch_products_returns_summaries() -> Result<()> {
    let executor = ScriptedExecutor::new().reply(
        PRODUCTS,
        json!({
            "products": {
                "edges": [
                    { "node": {
                        "id": "gid://shopify/Product/1",
                        "title": "Shirt",
                        "handle": "shirt",
                        "featuredImage": { "url": "https://cdn.example.com/shirt.png", "altText": "A shirt" }
                    } },
                    { "node": { "id": "gid://shopify/Product/2", "title": "Hat", "handle": "hat", "featuredImage": null } }
                ]
            }
        }),
    );

    let products = fetch_products(&executor, 10).await?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Shirt");
    assert_eq!(
        products[0].featured_image.as_ref().and_then(|image| image.alt_text.as_deref()),
        Some("A shirt")
    );
    assert!(products[1].featured_image.is_none());
    assert_eq!(executor.calls_to(PRODUCTS)[0].variables, json!({ "first": 10 }));
    Ok(())
}

#[tokio::test]
async fn test_page_size_is_clamped_before_sending() -> Result<()> {
    let executor = ScriptedExecutor::new()
        .reply(COLLECTIONS, json!({ "collections": { "edges": [] } }))
        .reply(COLLECTIONS, json!({ "collections": { "edges": [] } }));

    assert!(fetch_collections(&executor, 0).await?.is_empty());
    assert!(fetch_collections(&executor, 5000).await?.is_empty());

    let sizes: Vec<_> = executor
        .calls_to(COLLECTIONS)
        .into_iter()
        .map(|call| call.variables["first"].clone())
        .collect();
    assert_eq!(sizes, vec![json!(1), json!(250)]);
    Ok(())
}

#[tokio::test]
async fn test_fetch_collections_surfaces_remote_errors() {
    let executor = ScriptedExecutor::new().reply_errors(COLLECTIONS, &["Throttled"]);

    let error = fetch_collections(&executor, 10).await.unwrap_err();

    assert!(error.to_string().contains("Throttled"));
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let executor = ScriptedExecutor::new().fail_transport(PRODUCTS, "connection refused");

    let error = fetch_products(&executor, 10).await.unwrap_err();

    assert_eq!(error.to_string(), "Failed to fetch products");
    assert!(format!("{:#}", error).contains("connection refused"));
}

#[tokio::test]
async fn test_missing_node_title_is_an_error() {
    let executor = ScriptedExecutor::new().reply(
        COLLECTIONS,
        json!({ "collections": { "edges": [ { "node": { "id": "gid://shopify/Collection/1" } } ] } }),
    );

    let error = fetch_collections(&executor, 10).await.unwrap_err();

    assert!(error.to_string().contains("collections.edges[0]"));
}
