use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Password recovery token database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "password_recover")]
pub struct Model {
    /// Token ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Opaque token (unique)
    #[sea_orm(unique)]
    pub token: String,

    /// Email the token was issued for
    pub email: String,

    /// Token expiration timestamp
    pub expiration: DateTimeUtc,

    /// Redemption timestamp, only written when single-use tokens are enabled
    pub used_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_token(&self) -> crate::core::models::PasswordRecover {
        crate::core::models::PasswordRecover {
            id: self.id,
            token: self.token.clone(),
            email: self.email.clone(),
            expiration: self.expiration,
            used_at: self.used_at,
        }
    }
}
