use crate::api::UserError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller input for one product creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    pub title: String,
    /// Decimal string, parsed right before the price step
    pub price: String,
    #[serde(alias = "description")]
    pub description_html: String,
    pub collection_id: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreationRequest {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        description_html: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            description_html: description_html.into(),
            collection_id: collection_id.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Image URL to attach; blank counts as absent
    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller input rejected before any remote call
    InvalidInput,
    /// The call could not complete, or the envelope carried top-level `errors`
    TransportFailure,
    /// The mutation ran but returned `userErrors` / `mediaUserErrors`
    RemoteValidation,
    /// A successful-looking response lacked a field the step needs
    UnexpectedResponseShape,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::TransportFailure => "transport_failure",
            Self::RemoteValidation => "remote_validation",
            Self::UnexpectedResponseShape => "unexpected_response_shape",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure of a single step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct StepFailure {
    pub kind: ErrorKind,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_errors: Vec<UserError>,
}

/// What every step executor returns
pub type StepOutcome<T> = Result<T, StepFailure>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    CreateProduct,
    SetVariantPrice,
    AttachToCollection,
    AttachMedia,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::CreateProduct,
        Step::SetVariantPrice,
        Step::AttachToCollection,
        Step::AttachMedia,
    ];

    pub fn number(&self) -> usize {
        match self {
            Self::CreateProduct => 1,
            Self::SetVariantPrice => 2,
            Self::AttachToCollection => 3,
            Self::AttachMedia => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateProduct => "Create product",
            Self::SetVariantPrice => "Set variant price",
            Self::AttachToCollection => "Attach to collection",
            Self::AttachMedia => "Attach media",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.name())
    }
}

/// Recorded state of a step that depends on the created product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum StepState<T> {
    NotAttempted,
    Succeeded(T),
    Failed(StepFailure),
}

impl<T> StepState<T> {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_not_attempted(&self) -> bool {
        matches!(self, Self::NotAttempted)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

impl<T> From<StepOutcome<T>> for StepState<T> {
    fn from(outcome: StepOutcome<T>) -> Self {
        match outcome {
            Ok(value) => Self::Succeeded(value),
            Err(failure) => Self::Failed(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub price: Option<String>,
}

/// Result of step 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProduct {
    pub id: String,
    pub title: Option<String>,
    pub description_html: Option<String>,
    /// First variant, created implicitly with the product
    pub variant: ProductVariant,
}

/// Result of step 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedVariant {
    pub id: String,
    pub price: String,
    pub barcode: Option<String>,
    pub created_at: Option<String>,
}

/// Result of step 3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionAttachment {
    pub collection_id: String,
    pub title: Option<String>,
}

/// Result of step 4
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    pub media_content_type: String,
    pub status: String,
}

/// Everything one orchestration run recorded.
///
/// Built once at the end of a run and never mutated: either step 1 failed
/// and nothing else ran, or the product exists and each dependent step has
/// its own slot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrationState {
    pub(super) product: StepOutcome<CreatedProduct>,
    pub(super) variant: StepState<UpdatedVariant>,
    pub(super) collection: StepState<CollectionAttachment>,
    pub(super) media: StepState<MediaAttachment>,
}

impl OrchestrationState {
    pub(super) fn aborted(failure: StepFailure) -> Self {
        Self {
            product: Err(failure),
            variant: StepState::NotAttempted,
            collection: StepState::NotAttempted,
            media: StepState::NotAttempted,
        }
    }

    pub(super) fn created(
        product: CreatedProduct,
        variant: StepState<UpdatedVariant>,
        collection: StepState<CollectionAttachment>,
        media: StepState<MediaAttachment>,
    ) -> Self {
        Self {
            product: Ok(product),
            variant,
            collection,
            media,
        }
    }

    pub fn product(&self) -> Result<&CreatedProduct, &StepFailure> {
        self.product.as_ref()
    }

    /// Product GID, present only when step 1 succeeded
    pub fn entity_id(&self) -> Option<&str> {
        self.product.as_ref().ok().map(|p| p.id.as_str())
    }

    /// First variant GID, present only when step 1 succeeded
    pub fn variant_id(&self) -> Option<&str> {
        self.product.as_ref().ok().map(|p| p.variant.id.as_str())
    }

    pub fn variant(&self) -> &StepState<UpdatedVariant> {
        &self.variant
    }

    pub fn collection(&self) -> &StepState<CollectionAttachment> {
        &self.collection
    }

    pub fn media(&self) -> &StepState<MediaAttachment> {
        &self.media
    }

    /// Steps that sent (or tried to send) a request, in step order
    pub fn attempted_steps(&self) -> Vec<Step> {
        let mut steps = vec![Step::CreateProduct];
        if !self.variant.is_not_attempted() {
            steps.push(Step::SetVariantPrice);
        }
        if !self.collection.is_not_attempted() {
            steps.push(Step::AttachToCollection);
        }
        if !self.media.is_not_attempted() {
            steps.push(Step::AttachMedia);
        }
        steps
    }
}
