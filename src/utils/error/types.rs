//! Error types for the shop backend

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for the shop backend
pub type Result<T> = std::result::Result<T, ShopError>;

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMessage {
    /// Name of the offending field, as it appears in the request body
    pub field_name: String,
    /// Human readable reason
    pub message: String,
}

impl FieldMessage {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Main error type for the shop backend
#[derive(Error, Debug)]
pub enum ShopError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors that are not a referential integrity failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A delete or write was blocked by a foreign key
    #[error("{0}")]
    DatabaseIntegrity(String),

    /// Requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Authenticated user may not touch the resource
    #[error("{0}")]
    Forbidden(String),

    /// Missing or invalid bearer credential
    #[error("{0}")]
    Unauthorized(String),

    /// Token subject does not match a stored user
    #[error("{0}")]
    AuthenticationLookup(String),

    /// Declarative or business validation rejected the input
    #[error("Invalid data")]
    Validation(Vec<FieldMessage>),

    /// Malformed request
    #[error("{0}")]
    BadRequest(String),

    /// Mail transport failure
    #[error("{0}")]
    Notification(String),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
