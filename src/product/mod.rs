//! Step-by-step product creation
//!
//! Creating a sellable product takes four dependent Admin API mutations:
//!
//! 1. `productCreate` - creates the product and, implicitly, its first variant
//! 2. `productVariantUpdate` - sets that variant's price
//! 3. `collectionAddProducts` - adds the product to a collection
//! 4. `productCreateMedia` - attaches an image by URL (skipped without one)
//!
//! Step 1 gates everything else. Steps 2-4 only depend on the ids step 1
//! returned and are recorded independently, so a run ends either with no
//! product at all or with a product plus a per-step account of what stuck.
//!
//! ## Module Structure
//!
//! - `models` - request, step outcomes, orchestration state
//! - `error` - failure construction per error kind
//! - `helpers` - response-shape validation and price parsing
//! - `execution` - shared send/interpret/log scaffolding for a step
//! - `steps` - individual step implementations (step1-step4)
//! - `orchestrator` - sequencing and data threading between steps
//! - `report` - caller-facing aggregate result

mod error;
mod execution;
mod helpers;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod steps;

pub use models::{
    CollectionAttachment, CreatedProduct, CreationRequest, ErrorKind, MediaAttachment, OrchestrationState,
    ProductVariant, Step, StepFailure, StepOutcome, StepState, UpdatedVariant,
};
pub use orchestrator::{LeafExecution, ProductCreator};
pub use report::{CompletionStatus, CreationReport};
