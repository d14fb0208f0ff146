//! Response-shape validation and input parsing shared by the steps

use super::error::{invalid_input, remote_validation, transport_failure, unexpected_shape};
use super::models::StepOutcome;
use crate::api::{GraphQLResponse, Operation, UserError};
use serde_json::Value;

/// Validate the envelope and return the operation's payload (`data.<rootField>`).
///
/// Checked in order: top-level `errors`, presence of `data` and the payload,
/// then the payload's user-error list.
pub fn mutation_payload<'a>(response: &'a GraphQLResponse, operation: &Operation) -> StepOutcome<&'a Value> {
    if response.has_errors() {
        return Err(transport_failure(response.error_messages()));
    }

    let root_field = operation.root_field();
    let data = response
        .data
        .as_ref()
        .filter(|data| !data.is_null())
        .ok_or_else(|| unexpected_shape("response has no data"))?;

    let payload = data
        .get(root_field)
        .filter(|payload| !payload.is_null())
        .ok_or_else(|| unexpected_shape(format!("response has no `{}` payload", root_field)))?;

    if let Some(errors_field) = operation.user_errors_field() {
        let user_errors = user_errors(payload, root_field, errors_field)?;
        if !user_errors.is_empty() {
            return Err(remote_validation(user_errors));
        }
    }

    Ok(payload)
}

fn user_errors(payload: &Value, root_field: &str, errors_field: &str) -> StepOutcome<Vec<UserError>> {
    match payload.get(errors_field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            unexpected_shape(format!("`{}.{}` is malformed: {}", root_field, errors_field, e))
        }),
    }
}

/// Required non-empty string at a JSON pointer
pub fn require_str(value: &Value, pointer: &str) -> StepOutcome<String> {
    optional_str(value, pointer)
        .ok_or_else(|| unexpected_shape(format!("response is missing `{}`", pointer_to_path(pointer))))
}

/// Optional string at a JSON pointer; numbers are rendered as text
pub fn optional_str(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse the caller's decimal price string
pub fn parse_price(raw: &str) -> StepOutcome<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("price is required"));
    }

    let price: f64 = trimmed
        .parse()
        .map_err(|_| invalid_input(format!("price '{}' is not a number", raw)))?;

    if !price.is_finite() {
        return Err(invalid_input(format!("price '{}' is not a finite number", raw)));
    }
    if price < 0.0 {
        return Err(invalid_input(format!("price '{}' must not be negative", raw)));
    }

    Ok(price)
}

fn pointer_to_path(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}
