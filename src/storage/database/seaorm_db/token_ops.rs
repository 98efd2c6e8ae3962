use crate::core::models::PasswordRecover;
use crate::utils::error::{Result, ShopError};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, password_recover, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Store a password recovery token
    pub async fn store_recovery_token(
        &self,
        email: &str,
        token: &str,
        expiration: DateTime<Utc>,
    ) -> Result<PasswordRecover> {
        debug!("Storing password recovery token for: {}", email);

        let model = password_recover::ActiveModel {
            id: NotSet,
            token: Set(token.to_string()),
            email: Set(email.to_string()),
            expiration: Set(expiration),
            used_at: Set(None),
        }
        .insert(&self.db)
        .await
        .map_err(ShopError::Database)?;

        Ok(model.to_domain_token())
    }

    /// Tokens matching `token` that have not expired at `now`.
    /// With `unused_only`, redeemed tokens are excluded too.
    pub async fn find_valid_tokens(
        &self,
        token: &str,
        now: DateTime<Utc>,
        unused_only: bool,
    ) -> Result<Vec<PasswordRecover>> {
        debug!("Looking up password recovery token");

        let mut query = entities::PasswordRecover::find()
            .filter(password_recover::Column::Token.eq(token))
            .filter(password_recover::Column::Expiration.gt(now));
        if unused_only {
            query = query.filter(password_recover::Column::UsedAt.is_null());
        }

        let models = query
            .order_by_asc(password_recover::Column::Id)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_token()).collect())
    }

    /// Set the password of the token's user and, when `consume` is set, mark the token used.
    /// Both writes commit together.
    pub async fn redeem_recovery_token(
        &self,
        recover: &PasswordRecover,
        password_hash: &str,
        consume: bool,
    ) -> Result<()> {
        debug!("Redeeming password recovery token for: {}", recover.email);

        let txn = self.db.begin().await.map_err(ShopError::Database)?;

        let model = entities::User::find()
            .filter(user::Column::Email.eq(recover.email.as_str()))
            .one(&txn)
            .await
            .map_err(ShopError::Database)?
            .ok_or_else(|| ShopError::not_found("Email not found"))?;

        let mut active: user::ActiveModel = model.into();
        active.password = Set(password_hash.to_string());
        active.update(&txn).await.map_err(ShopError::Database)?;

        if consume {
            let result = entities::PasswordRecover::update_many()
                .col_expr(
                    password_recover::Column::UsedAt,
                    Expr::value(Some(Utc::now())),
                )
                .filter(password_recover::Column::Id.eq(recover.id))
                .filter(password_recover::Column::UsedAt.is_null())
                .exec(&txn)
                .await
                .map_err(ShopError::Database)?;

            if result.rows_affected == 0 {
                return Err(ShopError::not_found("Invalid token"));
            }
        }

        txn.commit().await.map_err(ShopError::Database)?;
        Ok(())
    }
}
