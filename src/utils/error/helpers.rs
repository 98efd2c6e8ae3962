//! Helper functions for creating specific error types

use super::types::{FieldMessage, ShopError};

impl ShopError {
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Not-found error for a numeric entity id
    pub fn resource_not_found(id: i64) -> Self {
        Self::NotFound(format!("Resource not found! Id: {}", id))
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn authentication_lookup<S: Into<String>>(message: S) -> Self {
        Self::AuthenticationLookup(message.into())
    }

    pub fn integrity<S: Into<String>>(message: S) -> Self {
        Self::DatabaseIntegrity(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::Notification(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Validation failure carrying a single field
    pub fn field<F: Into<String>, M: Into<String>>(field_name: F, message: M) -> Self {
        Self::Validation(vec![FieldMessage::new(field_name, message)])
    }

    /// Field-level detail, empty for every non-validation variant
    pub fn field_errors(&self) -> &[FieldMessage] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}
