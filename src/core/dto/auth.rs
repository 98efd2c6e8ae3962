//! Authentication and password recovery payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /auth/login` body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub username: String,
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub password: String,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// `POST /auth/recover-token` body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailDto {
    #[validate(
        email(message = "Email must be valid"),
        custom(function = "super::not_blank", message = "Required field")
    )]
    pub email: String,
}

/// `PUT /auth/new-password` body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordDto {
    #[validate(custom(function = "super::not_blank", message = "Required field"))]
    pub token: String,
    #[validate(length(min = 8, message = "Password must have at least 8 characters"))]
    pub password: String,
}
