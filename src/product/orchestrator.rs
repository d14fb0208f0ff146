//! Runs the four creation steps in dependency order

use super::models::{CreationRequest, OrchestrationState, StepState};
use super::report::CreationReport;
use super::steps::{
    step1_create_product, step2_set_variant_price, step3_attach_to_collection, step4_attach_media,
};
use crate::api::GraphQLExecutor;
use log::{error, info};

/// How steps 2-4 are scheduled once the product exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafExecution {
    /// Issue the price, collection and media calls together
    #[default]
    Concurrent,
    /// Issue them one after another in step order
    Sequential,
}

/// Creates a product and its attachments through a `GraphQLExecutor`.
///
/// Step 1 is a hard gate: if it fails nothing else runs. Steps 2, 3 and 4
/// only need the ids step 1 produced and never block each other. Nothing is
/// rolled back when a later step fails; the product stays on the remote side
/// and the report says which attachments are missing.
pub struct ProductCreator<E> {
    executor: E,
    leaf_execution: LeafExecution,
}

impl<E: GraphQLExecutor> ProductCreator<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            leaf_execution: LeafExecution::default(),
        }
    }

    pub fn with_leaf_execution(mut self, leaf_execution: LeafExecution) -> Self {
        self.leaf_execution = leaf_execution;
        self
    }

    pub fn sequential(self) -> Self {
        self.with_leaf_execution(LeafExecution::Sequential)
    }

    pub fn leaf_execution(&self) -> LeafExecution {
        self.leaf_execution
    }

    /// Run all steps and return what each one recorded
    pub async fn execute(&self, request: &CreationRequest) -> OrchestrationState {
        let product = match step1_create_product(&self.executor, request).await {
            Ok(product) => product,
            Err(failure) => {
                error!("Product creation failed, skipping remaining steps: {}", failure);
                return OrchestrationState::aborted(failure);
            }
        };

        info!("Created product {} with variant {}", product.id, product.variant.id);

        let variant = async {
            StepState::from(step2_set_variant_price(&self.executor, &product.variant.id, &request.price).await)
        };
        let collection = async {
            StepState::from(step3_attach_to_collection(&self.executor, &product.id, &request.collection_id).await)
        };
        let media = async {
            match request.image_url() {
                Some(image_url) => StepState::from(step4_attach_media(&self.executor, &product.id, image_url).await),
                None => {
                    info!("No image URL given, media step not attempted");
                    StepState::NotAttempted
                }
            }
        };

        let (variant, collection, media) = match self.leaf_execution {
            LeafExecution::Concurrent => futures::future::join3(variant, collection, media).await,
            LeafExecution::Sequential => (variant.await, collection.await, media.await),
        };

        OrchestrationState::created(product, variant, collection, media)
    }

    /// Run all steps and aggregate the caller-facing report
    pub async fn create(&self, request: &CreationRequest) -> CreationReport {
        let report = CreationReport::from_state(self.execute(request).await);
        info!("Product creation finished: {}", report.status());
        report
    }
}
