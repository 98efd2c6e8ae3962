//! Authentication configuration

use super::*;
use crate::utils::auth::crypto::generate_jwt_secret;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "generate_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// JWT issuer claim
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            jwt_issuer: default_jwt_issuer(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.jwt_secret.is_empty() && other.jwt_secret != "your-secret-key" {
            self.jwt_secret = other.jwt_secret;
        }
        if other.jwt_expiration != default_jwt_expiration() {
            self.jwt_expiration = other.jwt_expiration;
        }
        if other.jwt_issuer != default_jwt_issuer() {
            self.jwt_issuer = other.jwt_issuer;
        }
        self
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err(
                "JWT secret must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err("JWT expiration should not exceed 30 days for security reasons".to_string());
        }

        if self.jwt_issuer.is_empty() {
            return Err("JWT issuer cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Warn about settings that are acceptable for development only
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.jwt_expiration > 86400 * 7 {
        warn!(
            "JWT expiration is longer than a week ({}s). Consider shorter-lived tokens in production.",
            config.jwt_expiration
        );
    }
}
