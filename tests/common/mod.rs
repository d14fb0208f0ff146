//! Scripted stand-in for the Admin API used by the integration tests

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use shop_admin_cli::api::client::operation_name;
use shop_admin_cli::api::{GraphQLExecutor, GraphQLResponse};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

pub const CREATE: &str = "populateProduct";
pub const PRICE: &str = "updateVariantPrice";
pub const COLLECTION: &str = "addProductToCollection";
pub const MEDIA: &str = "addProductImage";
pub const PRODUCTS: &str = "fetchProducts";
pub const COLLECTIONS: &str = "fetchCollections";

pub enum Reply {
    Envelope(GraphQLResponse),
    Transport(String),
}

struct Scripted {
    reply: Reply,
    delay: Duration,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: String,
    pub document: String,
    pub variables: Value,
}

/// Answers each operation (by declared name) from a queue of canned replies
/// and records every call it receives. Unscripted calls fail like a dropped
/// connection.
#[derive(Default)]
pub struct ScriptedExecutor {
    replies: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, operation: &str, data: Value) -> Self {
        self.push(operation, Reply::Envelope(GraphQLResponse::with_data(data)), Duration::ZERO)
    }

    pub fn reply_after(self, operation: &str, data: Value, delay: Duration) -> Self {
        self.push(operation, Reply::Envelope(GraphQLResponse::with_data(data)), delay)
    }

    pub fn reply_errors(self, operation: &str, messages: &[&str]) -> Self {
        self.push(
            operation,
            Reply::Envelope(GraphQLResponse::with_errors(messages.iter().copied())),
            Duration::ZERO,
        )
    }

    pub fn fail_transport(self, operation: &str, message: &str) -> Self {
        self.push(operation, Reply::Transport(message.to_string()), Duration::ZERO)
    }

    fn push(self, operation: &str, reply: Reply, delay: Duration) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push_back(Scripted { reply, delay });
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.operation).collect()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|call| call.operation == operation).collect()
    }
}

#[async_trait]
impl GraphQLExecutor for ScriptedExecutor {
    async fn execute_graphql(&self, document: &str, variables: Value) -> Result<GraphQLResponse> {
        let operation = operation_name(document).unwrap_or("anonymous").to_string();
        self.calls.lock().unwrap().push(RecordedCall {
            operation: operation.clone(),
            document: document.to_string(),
            variables,
        });

        let scripted = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&operation)
            .and_then(VecDeque::pop_front);

        let Some(Scripted { reply, delay }) = scripted else {
            anyhow::bail!("connection reset: no scripted reply for {}", operation);
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Envelope(envelope) => Ok(envelope),
            Reply::Transport(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

pub fn product_created(product_id: &str, variant_id: &str) -> Value {
    json!({
        "productCreate": {
            "product": {
                "id": product_id,
                "title": "Shirt",
                "descriptionHtml": "<p>desc</p>",
                "variants": { "edges": [ { "node": { "id": variant_id, "price": "0.00" } } ] }
            },
            "userErrors": []
        }
    })
}

pub fn price_updated(variant_id: &str, price: &str) -> Value {
    json!({
        "productVariantUpdate": {
            "productVariant": {
                "id": variant_id,
                "price": price,
                "barcode": null,
                "createdAt": "2024-01-15T10:00:00Z"
            },
            "userErrors": []
        }
    })
}

pub fn collection_attached(collection_id: &str) -> Value {
    json!({
        "collectionAddProducts": {
            "collection": { "id": collection_id, "title": "Summer" },
            "userErrors": []
        }
    })
}

pub fn media_attached() -> Value {
    json!({
        "productCreateMedia": {
            "media": [ { "mediaContentType": "IMAGE", "status": "UPLOADED" } ],
            "mediaUserErrors": []
        }
    })
}

pub fn user_errors(root_field: &str, errors_field: &str, field: &str, message: &str) -> Value {
    let mut payload = serde_json::Map::new();
    payload.insert(errors_field.to_string(), json!([ { "field": [field], "message": message } ]));

    let mut data = serde_json::Map::new();
    data.insert(root_field.to_string(), Value::Object(payload));
    Value::Object(data)
}
