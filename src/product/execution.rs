//! Shared scaffolding around a single remote step

use super::error::transport_error;
use super::models::{Step, StepOutcome};
use crate::api::{GraphQLExecutor, GraphQLResponse, Operation};

/// Run one step: send the prepared operation (unless local validation already
/// failed), interpret the response, and log the outcome.
///
/// A failed `operation` never reaches the executor.
pub async fn execute_step<E, T, F>(
    executor: &E,
    step: Step,
    operation: StepOutcome<Operation>,
    interpret: F,
) -> StepOutcome<T>
where
    E: GraphQLExecutor + ?Sized,
    F: FnOnce(&Operation, &GraphQLResponse) -> StepOutcome<T>,
{
    let outcome = match operation {
        Ok(operation) => {
            log::info!("Running {} via {}", step, operation.operation_name());
            log::debug!("{} variables: {}", step, operation.variables());

            match operation.execute(executor).await {
                Ok(response) => interpret(&operation, &response),
                Err(e) => Err(transport_error(&e)),
            }
        }
        Err(failure) => {
            log::debug!("{} rejected locally, no request sent", step);
            Err(failure)
        }
    };

    match &outcome {
        Ok(_) => log::info!("{} succeeded", step),
        Err(failure) => log::warn!("{} failed: {}", step, failure),
    }

    outcome
}
