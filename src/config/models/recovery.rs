//! Password recovery configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Password recovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Token lifetime in minutes
    #[serde(default = "default_token_minutes")]
    pub token_minutes: i64,
    /// Front-end URI the token is appended to in the recovery mail
    #[serde(default = "default_recover_uri")]
    pub recover_uri: String,
    /// Invalidate a token after its first successful redemption
    #[serde(default)]
    pub single_use_tokens: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            token_minutes: default_token_minutes(),
            recover_uri: default_recover_uri(),
            single_use_tokens: false,
        }
    }
}

impl RecoveryConfig {
    /// Merge recovery configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.token_minutes != default_token_minutes() {
            self.token_minutes = other.token_minutes;
        }
        if other.recover_uri != default_recover_uri() {
            self.recover_uri = other.recover_uri;
        }
        if other.single_use_tokens {
            self.single_use_tokens = other.single_use_tokens;
        }
        self
    }

    /// Validate recovery configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.token_minutes <= 0 {
            return Err("Recovery token lifetime must be positive".to_string());
        }
        if self.recover_uri.is_empty() {
            return Err("Recovery URI cannot be empty".to_string());
        }
        Ok(())
    }
}
