//! Step 3: Add the product to the caller's collection

use super::super::error::invalid_input;
use super::super::execution::execute_step;
use super::super::helpers::{mutation_payload, optional_str, require_str};
use super::super::models::{CollectionAttachment, Step, StepOutcome};
use crate::api::{GraphQLExecutor, GraphQLResponse, Operation};

pub async fn step3_attach_to_collection<E: GraphQLExecutor + ?Sized>(
    executor: &E,
    product_id: &str,
    collection_id: &str,
) -> StepOutcome<CollectionAttachment> {
    execute_step(
        executor,
        Step::AttachToCollection,
        operation(product_id, collection_id),
        interpret,
    )
    .await
}

pub fn operation(product_id: &str, collection_id: &str) -> StepOutcome<Operation> {
    let collection_id = collection_id.trim();
    if collection_id.is_empty() {
        return Err(invalid_input("collection id is required"));
    }

    Ok(Operation::add_product_to_collection(collection_id, product_id))
}

pub fn interpret(operation: &Operation, response: &GraphQLResponse) -> StepOutcome<CollectionAttachment> {
    let payload = mutation_payload(response, operation)?;

    Ok(CollectionAttachment {
        collection_id: require_str(payload, "/collection/id")?,
        title: optional_str(payload, "/collection/title"),
    })
}
