//! User service: profile, directory, registration and account changes

use crate::auth::access::ensure_self_or_admin;
use crate::core::dto::{UserDto, UserInsertDto, UserUpdateDto};
use crate::core::models::{Authority, NewUser, User, UserChanges};
use crate::core::pagination::{Page, PageRequest};
use crate::storage::Database;
use crate::utils::auth::crypto::hash_password;
use crate::utils::error::{Result, ShopError};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn get_me(&self, me: &User) -> UserDto {
        me.clone().into()
    }

    pub async fn list_all(&self, request: &PageRequest) -> Result<Page<UserDto>> {
        let page = self.db.list_users(request).await?;
        Ok(page.map(UserDto::from))
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<UserDto> {
        self.db
            .find_user_by_id(user_id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ShopError::resource_not_found(user_id))
    }

    /// Register a new client account
    pub async fn insert(&self, dto: UserInsertDto) -> Result<UserDto> {
        dto.validate()?;
        self.ensure_email_free(&dto.email, None).await?;

        let new_user = NewUser {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            birth_date: dto.birth_date,
            password_hash: hash_password(&dto.password)?,
        };

        let user = self.db.create_user(new_user, Authority::Client).await?;
        info!("User {} registered", user.id);
        Ok(user.into())
    }

    /// Overwrite an account and replace its role set.
    /// Only admins may hand out `ROLE_ADMIN`.
    pub async fn update(&self, me: &User, user_id: i64, dto: UserUpdateDto) -> Result<UserDto> {
        dto.validate()?;

        self.db
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ShopError::resource_not_found(user_id))?;
        ensure_self_or_admin(me, user_id)?;
        self.ensure_email_free(&dto.email, Some(user_id)).await?;

        let role_ids: Vec<i64> = dto.roles.iter().map(|r| r.id).collect();
        if !me.is_admin() {
            if let Some(admin) = self.db.find_role(Authority::Admin).await? {
                if role_ids.contains(&admin.id) {
                    warn!("User {} tried to grant {}", me.id, Authority::Admin);
                    return Err(ShopError::forbidden("Access denied"));
                }
            }
        }

        let changes = UserChanges {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            birth_date: dto.birth_date,
            password_hash: hash_password(&dto.password)?,
            role_ids,
        };

        let user = self.db.update_user(user_id, changes).await?;
        info!("User {} updated by user {}", user.id, me.id);
        Ok(user.into())
    }

    pub async fn delete_by_id(&self, user_id: i64) -> Result<()> {
        self.db.delete_user(user_id).await?;
        info!("User {} deleted", user_id);
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str, except_user_id: Option<i64>) -> Result<()> {
        if self.db.email_in_use(email, except_user_id).await? {
            return Err(ShopError::field("email", "Email already exists"));
        }
        Ok(())
    }
}
