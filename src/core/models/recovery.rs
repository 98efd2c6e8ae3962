//! Password recovery token model

use chrono::{DateTime, Utc};

/// Issued recovery token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecover {
    pub id: i64,
    pub token: String,
    pub email: String,
    pub expiration: DateTime<Utc>,
    /// Set on redemption when single-use tokens are enabled
    pub used_at: Option<DateTime<Utc>>,
}

impl PasswordRecover {
    /// Whether the token can still be redeemed at `now`
    pub fn is_redeemable(&self, now: DateTime<Utc>, single_use: bool) -> bool {
        self.expiration > now && !(single_use && self.used_at.is_some())
    }
}
