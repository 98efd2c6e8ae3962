//! User and role models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authority labels understood by the access checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    /// Regular customer
    #[serde(rename = "ROLE_CLIENT")]
    Client,
    /// Shop administrator
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Authority {
    /// Label stored in the `roles` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Client => "ROLE_CLIENT",
            Authority::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Authority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_CLIENT" => Ok(Authority::Client),
            "ROLE_ADMIN" => Ok(Authority::Admin),
            _ => Err(format!("Unknown authority: {}", s)),
        }
    }
}

/// Role reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub authority: String,
}

/// Stored user with its roles, ordered by role id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    /// Argon2 hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<Role>,
}

impl User {
    /// Check whether the user carries the given authority
    pub fn has_authority(&self, authority: Authority) -> bool {
        self.roles.iter().any(|r| r.authority == authority.as_str())
    }

    /// Check whether the user carries at least one of the given authorities
    pub fn has_any_authority(&self, authorities: &[Authority]) -> bool {
        authorities.iter().any(|a| self.has_authority(*a))
    }

    pub fn is_admin(&self) -> bool {
        self.has_authority(Authority::Admin)
    }

    /// Role labels, used as the `authorities` token claim
    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.authority.clone()).collect()
    }
}

/// Values written when registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub password_hash: String,
}

/// Full replacement of a user's editable fields and role set
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub password_hash: String,
    pub role_ids: Vec<i64>,
}
