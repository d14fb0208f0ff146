//! Admin API Operations Module
//!
//! One `Operation` variant per GraphQL document the crate sends, with the
//! document text, its variables and the payload field names needed to read
//! the response.

pub mod documents;
pub mod operation;

pub use operation::{Operation, IMAGE_MEDIA_CONTENT_TYPE};
