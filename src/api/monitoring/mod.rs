//! Monitoring for Admin API calls
//!
//! Correlation ids, request/response logging and slow-call warnings.
//! No retry or rate limiting layer sits here: a failed call is reported
//! once and left to the caller.

pub mod config;
pub mod logging;

pub use config::{LogLevel, MonitoringConfig, MonitoringConfigBuilder};
pub use logging::{ApiLogger, OperationContext, OperationMetrics};
