//! Shopify Admin GraphQL API Module
//!
//! Client, response envelope, operation catalogue and call monitoring.
//! Everything above this layer talks to the remote service through the
//! `GraphQLExecutor` trait only.

pub mod client;
pub mod constants;
pub mod executor;
pub mod models;
pub mod monitoring;
pub mod operations;

pub use client::AdminClient;
pub use executor::GraphQLExecutor;
pub use models::{GraphQLError, GraphQLResponse, UserError};
pub use monitoring::{ApiLogger, LogLevel, MonitoringConfig, OperationContext, OperationMetrics};
pub use operations::Operation;
