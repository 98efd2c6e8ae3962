//! User payloads

use crate::core::models::{Role, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: i64,
    #[serde(default)]
    pub authority: String,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            authority: role.authority,
        }
    }
}

/// User as rendered in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub roles: Vec<RoleDto>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            birth_date: user.birth_date,
            roles: user.roles.into_iter().map(RoleDto::from).collect(),
        }
    }
}

/// `POST /users` body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInsertDto {
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub name: String,
    #[validate(
        email(message = "Email must be valid"),
        custom(function = "super::not_blank", message = "Required field")
    )]
    pub email: String,
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub phone: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 8, message = "Password must have at least 8 characters"))]
    pub password: String,
}

/// `PUT /users/{id}` body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub name: String,
    #[validate(
        email(message = "Email must be valid"),
        custom(function = "super::not_blank", message = "Required field")
    )]
    pub email: String,
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub phone: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 8, message = "Password must have at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    pub roles: Vec<RoleDto>,
}
