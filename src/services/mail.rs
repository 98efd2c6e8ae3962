//! Outbound mail
//!
//! The recovery flow talks to a [`Mailer`]; which implementation backs it is
//! chosen from the `mail` config section.

use crate::config::{MailConfig, MailTransport};
use crate::utils::error::{Result, ShopError};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A plain-text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Mail transport seam
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a message; failures surface as `ShopError::Notification`
    async fn send(&self, message: &MailMessage) -> Result<()>;
}

/// Writes messages to the log instead of delivering them
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        info!(
            from = %self.from,
            to = %message.to,
            subject = %message.subject,
            "Mail (log transport):\n{}",
            message.text
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// POSTs messages as JSON to an HTTP mail relay
#[derive(Debug, Clone)]
pub struct HttpRelayMailer {
    http_client: reqwest::Client,
    relay_url: String,
    relay_token: Option<String>,
    from: String,
    timeout: Duration,
}

impl HttpRelayMailer {
    pub fn new(
        relay_url: impl Into<String>,
        relay_token: Option<String>,
        from: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            relay_url: relay_url.into(),
            relay_token,
            from: from.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Mailer for HttpRelayMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let payload = RelayPayload {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            text: &message.text,
        };

        let mut request = self
            .http_client
            .post(&self.relay_url)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(token) = &self.relay_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShopError::notification(format!("Failed to send email: {}", e)))?;

        if !response.status().is_success() {
            return Err(ShopError::notification(format!(
                "Failed to send email: relay answered HTTP {}",
                response.status()
            )));
        }

        debug!("Mail relayed to {}", message.to);
        Ok(())
    }
}

/// Build the mailer selected by `config`
pub fn from_config(config: &MailConfig) -> Result<Arc<dyn Mailer>> {
    match config.transport {
        MailTransport::Log => Ok(Arc::new(LogMailer::new(config.from.clone()))),
        MailTransport::Http => {
            let relay_url = config
                .relay_url
                .clone()
                .ok_or_else(|| ShopError::Config("mail.relay_url is required".to_string()))?;
            Ok(Arc::new(HttpRelayMailer::new(
                relay_url,
                config.relay_token.clone(),
                config.from.clone(),
                Duration::from_secs(config.timeout),
            )))
        }
    }
}
