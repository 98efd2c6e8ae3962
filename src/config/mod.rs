//! Configuration management for the shop backend
//!
//! This module handles loading, validation, and management of the service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ShopError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Shop configuration
    pub shop: ShopConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ShopError::Config(format!("Failed to read config file: {}", e)))?;

        let mut shop: ShopConfig = serde_yaml::from_str(&content)
            .map_err(|e| ShopError::Config(format!("Failed to parse config: {}", e)))?;
        shop.apply_env_overrides()?;

        let config = Self { shop };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let shop = ShopConfig::from_env()?;
        let config = Self { shop };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.shop.server
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.shop.database
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.shop.auth
    }

    /// Get recovery configuration
    pub fn recovery(&self) -> &RecoveryConfig {
        &self.shop.recovery
    }

    /// Get mail configuration
    pub fn mail(&self) -> &MailConfig {
        &self.shop.mail
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.shop
            .server
            .validate()
            .map_err(|e| ShopError::Config(format!("Server config error: {}", e)))?;

        self.shop
            .server
            .cors
            .validate()
            .map_err(|e| ShopError::Config(format!("CORS config error: {}", e)))?;

        self.shop
            .database
            .validate()
            .map_err(|e| ShopError::Config(format!("Database config error: {}", e)))?;

        self.shop
            .auth
            .validate()
            .map_err(|e| ShopError::Config(format!("Auth config error: {}", e)))?;

        self.shop
            .recovery
            .validate()
            .map_err(|e| ShopError::Config(format!("Recovery config error: {}", e)))?;

        self.shop
            .mail
            .validate()
            .map_err(|e| ShopError::Config(format!("Mail config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.shop.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.shop = self.shop.merge(other.shop);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.shop)
            .map_err(|e| ShopError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.shop)
            .map_err(|e| ShopError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
