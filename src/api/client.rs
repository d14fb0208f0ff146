use super::constants::{self, headers};
use super::executor::GraphQLExecutor;
use super::models::GraphQLResponse;
use super::monitoring::{ApiLogger, MonitoringConfig};
use crate::config::{Settings, StoreConfig};
use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Admin API GraphQL client with connection pooling.
///
/// Credentials are supplied at construction; the client holds no global
/// session state and is cheap to clone.
#[derive(Clone)]
pub struct AdminClient {
    endpoint: String,
    http_client: reqwest::Client,
    access_token: String,
    api_logger: ApiLogger,
}

impl AdminClient {
    pub fn new(store: &StoreConfig, settings: &Settings) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .user_agent(concat!("shop-admin-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let monitoring = MonitoringConfig::builder()
            .correlation_ids(settings.correlation_ids)
            .request_logging(settings.log_requests)
            .performance_metrics(settings.log_timings)
            .log_level(settings.log_level)
            .slow_operation_threshold(Duration::from_millis(settings.slow_operation_ms))
            .build();

        Ok(Self::with_custom_client(store, settings, http_client, monitoring))
    }

    /// Create a client around a preconfigured HTTP client
    pub fn with_custom_client(
        store: &StoreConfig,
        settings: &Settings,
        http_client: reqwest::Client,
        monitoring: MonitoringConfig,
    ) -> Self {
        Self {
            endpoint: constants::graphql_endpoint(&store.shop_domain, store.api_version(settings)),
            http_client,
            access_token: store.access_token.clone(),
            api_logger: ApiLogger::new(monitoring),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_graphql(&self, document: &str, variables: Value) -> anyhow::Result<GraphQLResponse> {
        let correlation_id = uuid::Uuid::new_v4().to_string();
        let operation_name = operation_name(document).unwrap_or("anonymous");
        let context = self.api_logger.start_operation(operation_name, &correlation_id);

        let mut request_headers = HashMap::new();
        request_headers.insert("Content-Type".to_string(), headers::CONTENT_TYPE_JSON.to_string());
        request_headers.insert(headers::ACCESS_TOKEN.to_string(), self.access_token.clone());
        request_headers.insert(headers::X_REQUEST_ID.to_string(), correlation_id.clone());
        self.api_logger.log_request(&context, &self.endpoint, &request_headers);

        let body = json!({
            "query": document,
            "variables": variables,
        });

        let request_start = Instant::now();
        let sent = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .header(headers::ACCESS_TOKEN, &self.access_token)
            .header(headers::X_REQUEST_ID, &correlation_id)
            .json(&body)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                let metrics = context.create_metrics(false, None, Some(e.to_string()));
                self.api_logger.complete_operation(&context, &metrics);
                return Err(e).with_context(|| format!("Request to {} failed", self.endpoint));
            }
        };

        let status = response.status();
        self.api_logger.log_response(&context, status.as_u16(), request_start.elapsed());

        let result = Self::parse_response(status, response.text().await);

        let metrics = context.create_metrics(
            result.as_ref().map_or(false, |envelope| !envelope.has_errors()),
            Some(status.as_u16()),
            match &result {
                Ok(envelope) if envelope.has_errors() => Some(envelope.error_messages()),
                Ok(_) => None,
                Err(e) => Some(e.to_string()),
            },
        );
        self.api_logger.complete_operation(&context, &metrics);

        result
    }

    /// Turn an HTTP status and body into an envelope.
    ///
    /// A body that parses as an envelope is returned even for error statuses so
    /// GraphQL `errors` reach the caller verbatim.
    fn parse_response(status: reqwest::StatusCode, body: reqwest::Result<String>) -> anyhow::Result<GraphQLResponse> {
        let text = body.context("Failed to read response body")?;

        match serde_json::from_str::<GraphQLResponse>(&text) {
            Ok(envelope) if envelope.data.is_some() || envelope.has_errors() => Ok(envelope),
            _ if !status.is_success() => {
                anyhow::bail!("HTTP {}: {}", status.as_u16(), text.trim())
            }
            Ok(_) => anyhow::bail!("Response contained neither data nor errors"),
            Err(e) => Err(e).context("Failed to parse GraphQL response"),
        }
    }
}

#[async_trait]
impl GraphQLExecutor for AdminClient {
    async fn execute_graphql(&self, document: &str, variables: Value) -> anyhow::Result<GraphQLResponse> {
        self.post_graphql(document, variables).await
    }
}

/// Extract the declared operation name (`mutation foo(...)` → `foo`)
pub fn operation_name(document: &str) -> Option<&str> {
    let trimmed = document.trim_start();
    let rest = ["mutation", "query"]
        .iter()
        .find_map(|keyword| trimmed.strip_prefix(*keyword))?;
    let name = rest
        .trim_start()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()?;
    (!name.is_empty()).then_some(name)
}
