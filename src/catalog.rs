//! Read-only catalog listings: the products and collections a shop already has

use crate::api::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::api::{GraphQLExecutor, GraphQLResponse, Operation};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub featured_image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub title: String,
}

/// Clamp a requested page size into what the Admin API accepts
pub fn page_size(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

pub async fn fetch_products<E: GraphQLExecutor + ?Sized>(executor: &E, first: u32) -> Result<Vec<ProductSummary>> {
    let operation = Operation::FetchProducts { first: page_size(Some(first)) };
    let response = operation.execute(executor).await.context("Failed to fetch products")?;
    connection_nodes(&operation, &response)
}

pub async fn fetch_collections<E: GraphQLExecutor + ?Sized>(
    executor: &E,
    first: u32,
) -> Result<Vec<CollectionSummary>> {
    let operation = Operation::FetchCollections { first: page_size(Some(first)) };
    let response = operation.execute(executor).await.context("Failed to fetch collections")?;
    connection_nodes(&operation, &response)
}

/// Decode `data.<root>.edges[].node` into typed summaries
fn connection_nodes<T: DeserializeOwned>(operation: &Operation, response: &GraphQLResponse) -> Result<Vec<T>> {
    if response.has_errors() {
        anyhow::bail!("{} failed: {}", operation.operation_name(), response.error_messages());
    }

    let root = operation.root_field();
    let edges = response
        .data
        .as_ref()
        .and_then(|data| data.get(root))
        .and_then(|connection| connection.get("edges"))
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow::anyhow!("Missing or invalid '{}.edges' array in response", root))?;

    edges
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            let node = edge
                .get("node")
                .ok_or_else(|| anyhow::anyhow!("Missing node in {}.edges[{}]", root, index))?;
            serde_json::from_value(node.clone())
                .with_context(|| format!("Invalid node in {}.edges[{}]", root, index))
        })
        .collect()
}
