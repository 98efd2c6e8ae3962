//! Role and ownership guards
//!
//! Handlers call these at the top of their body before touching a service.

use crate::core::models::{Authority, User};
use crate::utils::error::{Result, ShopError};

/// Allow admins and the user owning `user_id`
pub fn ensure_self_or_admin(me: &User, user_id: i64) -> Result<()> {
    if me.is_admin() || me.id == user_id {
        return Ok(());
    }
    Err(ShopError::forbidden("Access denied"))
}

/// Require a single authority
pub fn require_authority(me: &User, authority: Authority) -> Result<()> {
    if me.has_authority(authority) {
        return Ok(());
    }
    Err(ShopError::forbidden("Access denied"))
}

/// Require at least one of `authorities`
pub fn require_any_authority(me: &User, authorities: &[Authority]) -> Result<()> {
    if me.has_any_authority(authorities) {
        return Ok(());
    }
    Err(ShopError::forbidden("Access denied"))
}
