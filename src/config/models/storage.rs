//! Database configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`postgres://...` or `sqlite://...`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Log every SQL statement at debug level
    #[serde(default)]
    pub sql_logging: bool,
    /// Run pending migrations on startup
    #[serde(default = "default_true")]
    pub migrate_on_start: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            sql_logging: false,
            migrate_on_start: true,
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.sql_logging {
            self.sql_logging = other.sql_logging;
        }
        if !other.migrate_on_start {
            self.migrate_on_start = other.migrate_on_start;
        }
        self
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL is required".to_string());
        }
        if self.max_connections == 0 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        Ok(())
    }

    /// Whether the URL points at a PostgreSQL server
    pub fn is_postgres(&self) -> bool {
        self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")
    }
}
