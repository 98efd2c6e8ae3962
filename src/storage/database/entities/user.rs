use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address (unique, used as login)
    #[sea_orm(unique)]
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Birth date
    pub birth_date: Option<Date>,

    /// Argon2 password hash
    pub password: String,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Role assignments
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,

    /// Orders placed by the user
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain user, attaching the given roles ordered by id
    pub fn to_domain_user(&self, roles: Vec<super::role::Model>) -> crate::core::models::User {
        let mut roles: Vec<_> = roles.into_iter().map(|r| r.to_domain_role()).collect();
        roles.sort_by_key(|r| r.id);

        crate::core::models::User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date,
            password_hash: self.password.clone(),
            roles,
        }
    }
}
