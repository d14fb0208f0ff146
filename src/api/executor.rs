//! The single capability the rest of the crate needs from the remote API

use super::models::GraphQLResponse;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Executes one GraphQL document with variables in a single round trip.
///
/// `Ok` means an envelope came back (it may still carry `errors`).
/// `Err` means the call could not be completed at all.
#[async_trait]
pub trait GraphQLExecutor: Send + Sync {
    async fn execute_graphql(&self, document: &str, variables: Value) -> anyhow::Result<GraphQLResponse>;
}

#[async_trait]
impl<E: GraphQLExecutor + ?Sized> GraphQLExecutor for Arc<E> {
    async fn execute_graphql(&self, document: &str, variables: Value) -> anyhow::Result<GraphQLResponse> {
        (**self).execute_graphql(document, variables).await
    }
}

