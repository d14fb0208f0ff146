//! Monitoring configuration with builder pattern

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monitoring and logging configuration for API calls
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub correlation_ids: bool,
    pub request_logging: bool,
    pub performance_metrics: bool,
    pub log_level: LogLevel,
    /// Calls slower than this are reported with a warning
    pub slow_operation_threshold: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            correlation_ids: true,
            request_logging: true,
            performance_metrics: true,
            log_level: LogLevel::Info,
            slow_operation_threshold: Duration::from_millis(3000),
        }
    }
}

impl MonitoringConfig {
    /// Create a new builder for MonitoringConfig
    pub fn builder() -> MonitoringConfigBuilder {
        MonitoringConfigBuilder::new()
    }
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Builder for MonitoringConfig
#[derive(Debug)]
pub struct MonitoringConfigBuilder {
    config: MonitoringConfig,
}

impl MonitoringConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MonitoringConfig::default(),
        }
    }

    /// Enable/disable correlation IDs
    pub fn correlation_ids(mut self, enabled: bool) -> Self {
        self.config.correlation_ids = enabled;
        self
    }

    /// Enable/disable request logging
    pub fn request_logging(mut self, enabled: bool) -> Self {
        self.config.request_logging = enabled;
        self
    }

    /// Enable/disable performance metrics
    pub fn performance_metrics(mut self, enabled: bool) -> Self {
        self.config.performance_metrics = enabled;
        self
    }

    /// Set logging level
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    pub fn slow_operation_threshold(mut self, threshold: Duration) -> Self {
        self.config.slow_operation_threshold = threshold;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> MonitoringConfig {
        self.config
    }
}

impl Default for MonitoringConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
