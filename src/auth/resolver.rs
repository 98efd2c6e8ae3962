//! Maps a verified token subject to the stored user

use crate::core::models::User;
use crate::storage::Database;
use crate::utils::error::{Result, ShopError};
use std::sync::Arc;
use tracing::debug;

/// Loads the principal behind a verified username
#[derive(Debug, Clone)]
pub struct AuthResolver {
    db: Arc<Database>,
}

impl AuthResolver {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Load the user whose email is `username`, with roles.
    /// A subject with no stored user is an authentication failure, not a 404.
    pub async fn resolve(&self, username: &str) -> Result<User> {
        debug!("Resolving principal: {}", username);

        self.db
            .find_user_by_email(username)
            .await?
            .ok_or_else(|| ShopError::authentication_lookup("Invalid user"))
    }
}
