//! Step 2: Set the price on the variant created in step 1

use super::super::execution::execute_step;
use super::super::helpers::{mutation_payload, optional_str, parse_price, require_str};
use super::super::models::{Step, StepOutcome, UpdatedVariant};
use crate::api::{GraphQLExecutor, GraphQLResponse, Operation};

/// `variant_id` must be the id step 1 returned, never caller input.
pub async fn step2_set_variant_price<E: GraphQLExecutor + ?Sized>(
    executor: &E,
    variant_id: &str,
    price: &str,
) -> StepOutcome<UpdatedVariant> {
    execute_step(executor, Step::SetVariantPrice, operation(variant_id, price), interpret).await
}

pub fn operation(variant_id: &str, price: &str) -> StepOutcome<Operation> {
    let price = parse_price(price)?;
    Ok(Operation::update_variant_price(variant_id, price))
}

pub fn interpret(operation: &Operation, response: &GraphQLResponse) -> StepOutcome<UpdatedVariant> {
    let payload = mutation_payload(response, operation)?;

    Ok(UpdatedVariant {
        id: require_str(payload, "/productVariant/id")?,
        price: require_str(payload, "/productVariant/price")?,
        barcode: optional_str(payload, "/productVariant/barcode"),
        created_at: optional_str(payload, "/productVariant/createdAt"),
    })
}
