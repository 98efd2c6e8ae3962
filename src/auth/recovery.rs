//! Password recovery flow
//!
//! A token is issued by mail and later exchanged for a new password. Tokens
//! stay redeemable until they expire unless `recovery.single_use_tokens` is set.

use crate::config::RecoveryConfig;
use crate::services::mail::{MailMessage, Mailer};
use crate::storage::Database;
use crate::utils::auth::crypto::{generate_recovery_token, hash_password};
use crate::utils::error::{Result, ShopError};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Issues and redeems password recovery tokens
#[derive(Clone)]
pub struct RecoveryService {
    db: Arc<Database>,
    mailer: Arc<dyn Mailer>,
    config: RecoveryConfig,
}

impl RecoveryService {
    pub fn new(db: Arc<Database>, mailer: Arc<dyn Mailer>, config: RecoveryConfig) -> Self {
        Self { db, mailer, config }
    }

    /// Store a fresh token for `email` and mail the recovery link.
    /// The token stays stored when delivery fails.
    pub async fn create_recover_token(&self, email: &str) -> Result<()> {
        self.db
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| ShopError::not_found("Email not found"))?;

        let token = generate_recovery_token();
        let expiration = Utc::now() + Duration::minutes(self.config.token_minutes);
        self.db
            .store_recovery_token(email, &token, expiration)
            .await?;

        let message = MailMessage {
            to: email.to_string(),
            subject: "Password recovery".to_string(),
            text: format!(
                "Follow the link to set a new password:\n\n{}{}\n\nThe link is valid for {} minutes.",
                self.config.recover_uri, token, self.config.token_minutes
            ),
        };
        self.mailer.send(&message).await?;

        info!("Password recovery token issued for {}", email);
        Ok(())
    }

    /// Replace the password of the user the token was issued to
    pub async fn save_new_password(&self, token: &str, new_password: &str) -> Result<()> {
        let single_use = self.config.single_use_tokens;
        let recover = self
            .db
            .find_valid_tokens(token, Utc::now(), single_use)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ShopError::not_found("Invalid token"))?;

        let password_hash = hash_password(new_password)?;
        self.db
            .redeem_recovery_token(&recover, &password_hash, single_use)
            .await?;

        debug!("Password replaced through recovery token for {}", recover.email);
        Ok(())
    }
}
