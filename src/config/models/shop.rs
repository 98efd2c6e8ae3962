//! Top-level shop configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Main shop configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShopConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Password recovery configuration
    #[serde(default)]
    pub recovery: RecoveryConfig,
    /// Outbound mail configuration
    #[serde(default)]
    pub mail: MailConfig,
}

impl ShopConfig {
    /// Defaults overridden by `SHOP_*` environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `SHOP_*` environment overrides on top of the current values
    pub fn apply_env_overrides(&mut self) -> crate::utils::error::Result<()> {
        if let Some(host) = env_var("SHOP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var("SHOP_PORT") {
            self.server.port = parse_env("SHOP_PORT", &port)?;
        }
        if let Some(url) = env_var("SHOP_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(secret) = env_var("SHOP_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(expiration) = env_var("SHOP_JWT_EXPIRATION") {
            self.auth.jwt_expiration = parse_env("SHOP_JWT_EXPIRATION", &expiration)?;
        }
        if let Some(minutes) = env_var("SHOP_RECOVERY_TOKEN_MINUTES") {
            self.recovery.token_minutes = parse_env("SHOP_RECOVERY_TOKEN_MINUTES", &minutes)?;
        }
        if let Some(uri) = env_var("SHOP_RECOVERY_URI") {
            self.recovery.recover_uri = uri;
        }
        if let Some(from) = env_var("SHOP_MAIL_FROM") {
            self.mail.from = from;
        }
        if let Some(relay) = env_var("SHOP_MAIL_RELAY_URL") {
            self.mail.relay_url = Some(relay);
            self.mail.transport = MailTransport::Http;
        }
        Ok(())
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.database = self.database.merge(other.database);
        self.auth = self.auth.merge(other.auth);
        self.recovery = self.recovery.merge(other.recovery);
        self.mail = self.mail.merge(other.mail);
        self
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> crate::utils::error::Result<T> {
    value.parse().map_err(|_| {
        warn!("Unparsable value for {}", key);
        crate::utils::error::ShopError::Config(format!("Invalid value for {}: {}", key, value))
    })
}
