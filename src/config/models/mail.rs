//! Outbound mail configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which transport delivers outbound mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MailTransport {
    /// Write messages to the log only
    #[default]
    Log,
    /// POST messages to an HTTP relay
    Http,
}

/// Mail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Transport kind
    #[serde(default)]
    pub transport: MailTransport,
    /// Sender address
    #[serde(default = "default_mail_from")]
    pub from: String,
    /// Relay endpoint, required for the `http` transport
    #[serde(default)]
    pub relay_url: Option<String>,
    /// Bearer token sent to the relay
    #[serde(default)]
    pub relay_token: Option<String>,
    /// Relay request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: MailTransport::default(),
            from: default_mail_from(),
            relay_url: None,
            relay_token: None,
            timeout: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Merge mail configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.transport != MailTransport::default() {
            self.transport = other.transport;
        }
        if other.from != default_mail_from() {
            self.from = other.from;
        }
        if other.relay_url.is_some() {
            self.relay_url = other.relay_url;
        }
        if other.relay_token.is_some() {
            self.relay_token = other.relay_token;
        }
        if other.timeout != default_timeout() {
            self.timeout = other.timeout;
        }
        self
    }

    /// Validate mail configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.from.is_empty() {
            return Err("Mail sender address cannot be empty".to_string());
        }
        if self.transport == MailTransport::Http
            && self.relay_url.as_deref().unwrap_or("").is_empty()
        {
            return Err("relay_url is required for the http mail transport".to_string());
        }
        Ok(())
    }
}
