//! Caller-facing result assembled from an `OrchestrationState`

use super::models::{
    CollectionAttachment, CreatedProduct, MediaAttachment, OrchestrationState, Step, StepFailure, StepState,
    UpdatedVariant,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Product created and every attempted attachment succeeded
    Completed,
    /// Product created but at least one attachment failed
    PartiallyCompleted,
    /// Product creation itself failed
    Failed,
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Completed => "completed",
            Self::PartiallyCompleted => "partially completed",
            Self::Failed => "failed",
        })
    }
}

/// JSON-serializable outcome of one product creation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CreationReport {
    /// Step 1 failed; no later step ran
    Failed { step: Step, error: StepFailure },
    /// The product exists; each dependent step reports its own state
    Created {
        status: CompletionStatus,
        product: CreatedProduct,
        variant: StepState<UpdatedVariant>,
        collection: StepState<CollectionAttachment>,
        media: StepState<MediaAttachment>,
    },
}

impl CreationReport {
    /// Consume a finished run. Partial failure is a normal result here, not an error.
    pub fn from_state(state: OrchestrationState) -> Self {
        let OrchestrationState {
            product,
            variant,
            collection,
            media,
        } = state;

        match product {
            Err(error) => Self::Failed {
                step: Step::CreateProduct,
                error,
            },
            Ok(product) => {
                let any_failed = variant.is_failed() || collection.is_failed() || media.is_failed();
                Self::Created {
                    status: if any_failed {
                        CompletionStatus::PartiallyCompleted
                    } else {
                        CompletionStatus::Completed
                    },
                    product,
                    variant,
                    collection,
                    media,
                }
            }
        }
    }

    pub fn status(&self) -> CompletionStatus {
        match self {
            Self::Failed { .. } => CompletionStatus::Failed,
            Self::Created { status, .. } => *status,
        }
    }

    pub fn product_id(&self) -> Option<&str> {
        match self {
            Self::Failed { .. } => None,
            Self::Created { product, .. } => Some(&product.id),
        }
    }

    /// Every failed step with its failure, in step order
    pub fn failures(&self) -> Vec<(Step, &StepFailure)> {
        match self {
            Self::Failed { step, error } => vec![(*step, error)],
            Self::Created {
                variant,
                collection,
                media,
                ..
            } => [
                (Step::SetVariantPrice, variant.failure()),
                (Step::AttachToCollection, collection.failure()),
                (Step::AttachMedia, media.failure()),
            ]
            .into_iter()
            .filter_map(|(step, failure)| failure.map(|f| (step, f)))
            .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
