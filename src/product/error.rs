//! Failure construction for each error kind

use super::models::{ErrorKind, StepFailure};
use crate::api::UserError;

pub fn invalid_input(detail: impl Into<String>) -> StepFailure {
    build_failure(ErrorKind::InvalidInput, detail, Vec::new())
}

/// The executor could not complete the call
pub fn transport_error(error: &anyhow::Error) -> StepFailure {
    build_failure(ErrorKind::TransportFailure, format!("{:#}", error), Vec::new())
}

/// Top-level `errors` in the envelope, messages kept verbatim
pub fn transport_failure(messages: impl Into<String>) -> StepFailure {
    build_failure(ErrorKind::TransportFailure, messages, Vec::new())
}

pub fn remote_validation(user_errors: Vec<UserError>) -> StepFailure {
    let detail = user_errors
        .iter()
        .map(UserError::describe)
        .collect::<Vec<_>>()
        .join("; ");
    build_failure(ErrorKind::RemoteValidation, detail, user_errors)
}

pub fn unexpected_shape(detail: impl Into<String>) -> StepFailure {
    build_failure(ErrorKind::UnexpectedResponseShape, detail, Vec::new())
}

fn build_failure(kind: ErrorKind, detail: impl Into<String>, user_errors: Vec<UserError>) -> StepFailure {
    StepFailure {
        kind,
        detail: detail.into(),
        user_errors,
    }
}
