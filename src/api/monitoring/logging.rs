//! Structured logging with correlation tracking for Admin API calls
//!
//! Every GraphQL round trip gets a correlation id; request, response and
//! completion events are emitted as JSON through the `log` facade.

use super::config::{LogLevel, MonitoringConfig};
use log::{debug, error, info, warn};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Structured logger for API calls with correlation tracking
#[derive(Debug, Clone)]
pub struct ApiLogger {
    config: MonitoringConfig,
}

/// Context for a single API call
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Unique correlation ID for this call
    pub correlation_id: String,
    /// GraphQL operation name
    pub operation_name: String,
    /// Start time for performance tracking
    pub start_time: Instant,
}

/// Timing and outcome of one API call
#[derive(Debug, Clone)]
pub struct OperationMetrics {
    pub duration: Duration,
    pub success: bool,
    pub status_code: Option<u16>,
    pub error_message: Option<String>,
}

impl ApiLogger {
    pub fn new(config: MonitoringConfig) -> Self {
        Self { config }
    }

    /// Begin tracking one GraphQL round trip
    pub fn start_operation(&self, operation_name: &str, correlation_id: &str) -> OperationContext {
        let context = OperationContext {
            correlation_id: correlation_id.to_string(),
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
        };

        if self.config.request_logging && self.should_log(LogLevel::Info) {
            info!("GraphQL call started: {}", self.record("operation_started", &context, json!({})));
        }

        context
    }

    pub fn log_request(&self, context: &OperationContext, url: &str, headers: &HashMap<String, String>) {
        if self.config.request_logging && self.should_log(LogLevel::Debug) {
            let fields = json!({
                "method": "POST",
                "url": url,
                "headers": self.sanitize_headers(headers),
            });
            debug!("GraphQL request: {}", self.record("http_request", context, fields));
        }
    }

    /// Error statuses are logged at warn regardless of the debug gate
    pub fn log_response(&self, context: &OperationContext, status_code: u16, duration: Duration) {
        if !self.config.request_logging {
            return;
        }

        let fields = json!({ "status_code": status_code, "duration_ms": duration.as_millis() });
        if status_code >= 400 && self.should_log(LogLevel::Warn) {
            warn!("GraphQL response (HTTP error): {}", self.record("http_response", context, fields));
        } else if self.should_log(LogLevel::Debug) {
            debug!("GraphQL response: {}", self.record("http_response", context, fields));
        }
    }

    pub fn complete_operation(&self, context: &OperationContext, metrics: &OperationMetrics) {
        if !self.config.performance_metrics {
            return;
        }

        let threshold = self.config.slow_operation_threshold;
        if metrics.is_slow(threshold) && self.should_log(LogLevel::Warn) {
            let fields = json!({
                "duration_ms": metrics.duration.as_millis(),
                "threshold_ms": threshold.as_millis(),
            });
            warn!("Slow GraphQL call: {}", self.record("slow_operation", context, fields));
        }

        let fields = json!({
            "duration_ms": metrics.duration.as_millis(),
            "success": metrics.success,
            "status_code": metrics.status_code,
            "error_message": metrics.error_message,
        });
        if metrics.success {
            if self.should_log(LogLevel::Info) {
                info!("GraphQL call completed: {}", self.record("operation_completed", context, fields));
            }
        } else if self.should_log(LogLevel::Error) {
            error!("GraphQL call failed: {}", self.record("operation_completed", context, fields));
        }
    }

    /// One JSON log record: event name, call identity, timestamp, plus `fields`
    fn record(&self, event: &str, context: &OperationContext, fields: Value) -> Value {
        let mut record = json!({
            "event": event,
            "correlation_id": self.correlation_field(context),
            "operation": context.operation_name,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        if let (Some(record), Value::Object(fields)) = (record.as_object_mut(), fields) {
            record.extend(fields);
        }
        record
    }

    fn correlation_field(&self, context: &OperationContext) -> Option<String> {
        self.config
            .correlation_ids
            .then(|| context.correlation_id.clone())
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level <= self.config.log_level
    }

    /// Access tokens and anything else credential-like never reach the log
    fn sanitize_headers(&self, headers: &HashMap<String, String>) -> HashMap<String, String> {
        const SENSITIVE: [&str; 3] = ["authorization", "token", "key"];

        headers
            .iter()
            .map(|(name, value)| {
                let lowered = name.to_lowercase();
                let value = if SENSITIVE.iter().any(|marker| lowered.contains(marker)) {
                    "[REDACTED]".to_string()
                } else {
                    value.clone()
                };
                (name.clone(), value)
            })
            .collect()
    }
}

impl OperationContext {
    /// Calculate elapsed time since the call started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Create metrics from this context
    pub fn create_metrics(&self, success: bool, status_code: Option<u16>, error_message: Option<String>) -> OperationMetrics {
        OperationMetrics {
            duration: self.elapsed(),
            success,
            status_code,
            error_message,
        }
    }
}

impl OperationMetrics {
    pub fn is_slow(&self, threshold: Duration) -> bool {
        self.duration > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_config() -> MonitoringConfig {
        MonitoringConfig::builder().log_level(LogLevel::Debug).build()
    }

    #[test]
    fn test_operation_context_creation() {
        let logger = ApiLogger::new(debug_config());
        let context = logger.start_operation("populateProduct", "test-123");

        assert_eq!(context.correlation_id, "test-123");
        assert_eq!(context.operation_name, "populateProduct");
    }

    #[test]
    fn test_header_sanitization() {
        let logger = ApiLogger::new(debug_config());
        let mut headers = HashMap::new();
        headers.insert("X-Shopify-Access-Token".to_string(), "shpat_secret".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("X-API-Key".to_string(), "secret-key".to_string());

        let sanitized = logger.sanitize_headers(&headers);

        assert_eq!(sanitized.get("X-Shopify-Access-Token"), Some(&"[REDACTED]".to_string()));
        assert_eq!(sanitized.get("Content-Type"), Some(&"application/json".to_string()));
        assert_eq!(sanitized.get("X-API-Key"), Some(&"[REDACTED]".to_string()));
    }

    #[test]
    fn test_log_level_filtering() {
        let logger = ApiLogger::new(MonitoringConfig::builder().log_level(LogLevel::Warn).build());

        assert!(logger.should_log(LogLevel::Error));
        assert!(logger.should_log(LogLevel::Warn));
        assert!(!logger.should_log(LogLevel::Info));
        assert!(!logger.should_log(LogLevel::Trace));
    }

    #[test]
    fn test_correlation_field_respects_config() {
        let context = OperationContext {
            correlation_id: "abc".to_string(),
            operation_name: "fetchProducts".to_string(),
            start_time: Instant::now(),
        };

        assert_eq!(ApiLogger::new(debug_config()).correlation_field(&context), Some("abc".to_string()));
        assert_eq!(ApiLogger::new(MonitoringConfig::builder().correlation_ids(false).build()).correlation_field(&context), None);
    }

    #[test]
    fn test_record_merges_fields() {
        let logger = ApiLogger::new(debug_config());
        let context = logger.start_operation("addProductImage", "corr-1");

        let record = logger.record("http_response", &context, json!({ "status_code": 200 }));

        assert_eq!(record["event"], "http_response");
        assert_eq!(record["correlation_id"], "corr-1");
        assert_eq!(record["operation"], "addProductImage");
        assert_eq!(record["status_code"], 200);
        assert!(record["timestamp"].is_string());
    }

    #[test]
    fn test_performance_threshold() {
        let metrics = OperationMetrics {
            duration: Duration::from_millis(5000),
            success: true,
            status_code: Some(200),
            error_message: None,
        };

        assert!(metrics.is_slow(Duration::from_millis(3000)));
        assert!(!metrics.is_slow(Duration::from_millis(10000)));
    }
}
