use crate::core::models::{Authority, NewUser, Role, User, UserChanges};
use crate::core::pagination::{Page, PageRequest};
use crate::utils::error::{Result, ShopError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role, user, user_role};
use super::types::{SeaOrmDatabase, apply_sort};

const EMAIL_TAKEN: &str = "Email already exists";

impl SeaOrmDatabase {
    /// Find user by ID, with roles
    pub async fn find_user_by_id(&self, user_id: i64) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let rows = entities::User::find_by_id(user_id)
            .find_with_related(entities::Role)
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(model, roles)| model.to_domain_user(roles)))
    }

    /// Find user by email, with roles
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let rows = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .find_with_related(entities::Role)
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(model, roles)| model.to_domain_user(roles)))
    }

    /// Whether another user already owns `email`
    pub async fn email_in_use(&self, email: &str, except_user_id: Option<i64>) -> Result<bool> {
        let mut query = entities::User::find().filter(user::Column::Email.eq(email));
        if let Some(id) = except_user_id {
            query = query.filter(user::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(ShopError::Database)?;
        Ok(count > 0)
    }

    /// Page through all users
    pub async fn list_users(&self, request: &PageRequest) -> Result<Page<User>> {
        debug!("Listing users, page {} size {}", request.page, request.size);

        let query = apply_sort(
            entities::User::find(),
            request,
            &[
                ("id", user::Column::Id),
                ("name", user::Column::Name),
                ("email", user::Column::Email),
            ],
            user::Column::Id,
        )?;

        let paginator = query.paginate(&self.db, request.size);
        let total = paginator.num_items().await.map_err(ShopError::Database)?;
        let models = paginator
            .fetch_page(request.page)
            .await
            .map_err(ShopError::Database)?;

        let roles = models
            .load_many_to_many(entities::Role, entities::UserRole, &self.db)
            .await
            .map_err(ShopError::Database)?;

        let users = models
            .iter()
            .zip(roles)
            .map(|(model, roles)| model.to_domain_user(roles))
            .collect();

        Ok(Page::new(users, request, total))
    }

    /// Find a role by its authority label
    pub async fn find_role(&self, authority: Authority) -> Result<Option<Role>> {
        let model = entities::Role::find()
            .filter(role::Column::Authority.eq(authority.as_str()))
            .one(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(model.map(|m| m.to_domain_role()))
    }

    /// Register a user holding a single authority
    pub async fn create_user(&self, new_user: NewUser, authority: Authority) -> Result<User> {
        debug!("Creating user: {}", new_user.email);

        let txn = self.db.begin().await.map_err(ShopError::Database)?;

        let role = entities::Role::find()
            .filter(role::Column::Authority.eq(authority.as_str()))
            .one(&txn)
            .await
            .map_err(ShopError::Database)?
            .ok_or_else(|| ShopError::internal(format!("Role {} is not seeded", authority)))?;

        let model = user::ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            phone: Set(new_user.phone),
            birth_date: Set(new_user.birth_date),
            password: Set(new_user.password_hash),
        }
        .insert(&txn)
        .await
        .map_err(|e| ShopError::from_unique_write(e, "email", EMAIL_TAKEN))?;

        user_role::ActiveModel {
            user_id: Set(model.id),
            role_id: Set(role.id),
        }
        .insert(&txn)
        .await
        .map_err(ShopError::Database)?;

        txn.commit().await.map_err(ShopError::Database)?;

        Ok(model.to_domain_user(vec![role]))
    }

    /// Overwrite a user's fields and replace its role set
    pub async fn update_user(&self, user_id: i64, changes: UserChanges) -> Result<User> {
        debug!("Updating user: {}", user_id);

        let txn = self.db.begin().await.map_err(ShopError::Database)?;

        let existing = entities::User::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(ShopError::Database)?
            .ok_or_else(|| ShopError::resource_not_found(user_id))?;

        let mut role_ids = changes.role_ids;
        role_ids.sort_unstable();
        role_ids.dedup();

        let roles = if role_ids.is_empty() {
            vec![]
        } else {
            entities::Role::find()
                .filter(role::Column::Id.is_in(role_ids.clone()))
                .all(&txn)
                .await
                .map_err(ShopError::Database)?
        };
        if let Some(missing) = role_ids
            .iter()
            .find(|id| !roles.iter().any(|r| r.id == **id))
        {
            return Err(ShopError::resource_not_found(*missing));
        }

        let mut active: user::ActiveModel = existing.into();
        active.name = Set(changes.name);
        active.email = Set(changes.email);
        active.phone = Set(changes.phone);
        active.birth_date = Set(changes.birth_date);
        active.password = Set(changes.password_hash);
        let model = active
            .update(&txn)
            .await
            .map_err(|e| ShopError::from_unique_write(e, "email", EMAIL_TAKEN))?;

        entities::UserRole::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(ShopError::Database)?;

        if !roles.is_empty() {
            let links = roles.iter().map(|r| user_role::ActiveModel {
                user_id: Set(user_id),
                role_id: Set(r.id),
            });
            entities::UserRole::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(ShopError::Database)?;
        }

        txn.commit().await.map_err(ShopError::Database)?;

        Ok(model.to_domain_user(roles))
    }

    /// Delete a user; blocked while orders reference it
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        debug!("Deleting user: {}", user_id);

        let exists = entities::User::find_by_id(user_id)
            .count(&self.db)
            .await
            .map_err(ShopError::Database)?
            > 0;
        if !exists {
            return Err(ShopError::resource_not_found(user_id));
        }

        entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| ShopError::from_write(e, "Referential integrity failure"))?;

        Ok(())
    }
}
