use crate::api::constants::DEFAULT_API_VERSION;
use crate::api::monitoring::LogLevel;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Environment variable names read by `StoreConfig::from_env`
pub mod env_vars {
    pub const SHOP_DOMAIN: &str = "SHOPIFY_SHOP_DOMAIN";
    pub const ACCESS_TOKEN: &str = "SHOPIFY_ACCESS_TOKEN";
    pub const API_VERSION: &str = "SHOPIFY_API_VERSION";
}

/// Connection details for one shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub shop_domain: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_store: Option<String>,
    #[serde(default)]
    pub stores: HashMap<String, StoreConfig>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Run the price, collection and media steps concurrently
    #[serde(default = "default_concurrent_steps")]
    pub concurrent_steps: bool,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "default_slow_operation_ms")]
    pub slow_operation_ms: u64,
    /// Attach the request id to every API log record
    #[serde(default = "default_true")]
    pub correlation_ids: bool,
    /// Log each GraphQL request and response
    #[serde(default = "default_true")]
    pub log_requests: bool,
    /// Log call durations and slow-call warnings
    #[serde(default = "default_true")]
    pub log_timings: bool,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_concurrent_steps() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_slow_operation_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            concurrent_steps: default_concurrent_steps(),
            log_level: default_log_level(),
            slow_operation_ms: default_slow_operation_ms(),
            correlation_ids: true,
            log_requests: true,
            log_timings: true,
        }
    }
}

impl StoreConfig {
    /// Read store credentials from the environment (after loading `.env` if present).
    ///
    /// Returns `Ok(None)` when neither the domain nor the token is set, and an
    /// error when only one of them is.
    pub fn from_env() -> Result<Option<Self>> {
        dotenvy::dotenv().ok();

        let domain = std::env::var(env_vars::SHOP_DOMAIN).ok().filter(|v| !v.trim().is_empty());
        let token = std::env::var(env_vars::ACCESS_TOKEN).ok().filter(|v| !v.trim().is_empty());
        let api_version = std::env::var(env_vars::API_VERSION).ok().filter(|v| !v.trim().is_empty());

        match (domain, token) {
            (Some(shop_domain), Some(access_token)) => Ok(Some(Self {
                shop_domain,
                access_token,
                api_version,
            })),
            (None, None) => Ok(None),
            (Some(_), None) => anyhow::bail!("{} is set but {} is missing", env_vars::SHOP_DOMAIN, env_vars::ACCESS_TOKEN),
            (None, Some(_)) => anyhow::bail!("{} is set but {} is missing", env_vars::ACCESS_TOKEN, env_vars::SHOP_DOMAIN),
        }
    }

    /// API version for this store, falling back to the global setting
    pub fn api_version<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.api_version.as_deref().unwrap_or(settings.api_version.as_str())
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("shop-admin-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".shop-admin-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config = Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config with {} stores", config.stores.len());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Add or replace a store; the first store added becomes current
    pub fn add_store(&mut self, name: String, store: StoreConfig) {
        info!("Adding store: {}", name);
        self.stores.insert(name.clone(), store);

        if self.current_store.is_none() {
            info!("Set {} as current store", name);
            self.current_store = Some(name);
        }
    }

    pub fn select_store(&mut self, name: &str) -> Result<()> {
        if !self.stores.contains_key(name) {
            anyhow::bail!("Store '{}' not found", name);
        }
        self.current_store = Some(name.to_string());
        Ok(())
    }

    pub fn remove_store(&mut self, name: &str) -> Result<StoreConfig> {
        let removed = self
            .stores
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("Store '{}' not found", name))?;

        if self.current_store.as_deref() == Some(name) {
            self.current_store = self.stores.keys().min().cloned();
        }
        Ok(removed)
    }

    pub fn get_current_store(&self) -> Option<&StoreConfig> {
        let current = self.current_store.as_ref()?;
        self.stores.get(current)
    }

    /// Pick the store to talk to.
    ///
    /// An explicitly named store wins; otherwise environment credentials,
    /// then the current store from the config file.
    pub fn resolve_store(&self, name: Option<&str>) -> Result<StoreConfig> {
        if let Some(name) = name {
            return self
                .stores
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Store '{}' not found", name));
        }

        if let Some(store) = StoreConfig::from_env()? {
            debug!("Using store credentials from environment");
            return Ok(store);
        }

        self.get_current_store()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No store configured. Run 'shop-admin-cli store add' or set {} and {}.", env_vars::SHOP_DOMAIN, env_vars::ACCESS_TOKEN))
    }
}
