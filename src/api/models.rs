use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed GraphQL response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

/// Top-level GraphQL error entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Application-level rejection reported inside a mutation payload
/// (`userErrors` / `mediaUserErrors`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

impl GraphQLResponse {
    /// Envelope carrying only data
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Envelope carrying only top-level errors
    pub fn with_errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: Some(
                messages
                    .into_iter()
                    .map(|message| GraphQLError {
                        message: message.into(),
                        path: None,
                        extensions: None,
                    })
                    .collect(),
            ),
        }
    }

    /// True when the envelope has a non-empty `errors` list
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().map_or(false, |errors| !errors.is_empty())
    }

    /// All top-level error messages joined with `"; "`
    pub fn error_messages(&self) -> String {
        self.errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl UserError {
    /// Render as `field.path: message`, or just the message when no field is named
    pub fn describe(&self) -> String {
        match &self.field {
            Some(path) if !path.is_empty() => format!("{}: {}", path.join("."), self.message),
            _ => self.message.clone(),
        }
    }
}
