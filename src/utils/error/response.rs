//! HTTP response handling for errors

use super::types::{FieldMessage, ShopError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

impl ShopError {
    /// Status code and machine readable code for this error
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ShopError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ShopError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ShopError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ShopError::AuthenticationLookup(_) => (StatusCode::UNAUTHORIZED, "AUTH_LOOKUP_FAILED"),
            ShopError::Jwt(_) => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            ShopError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ShopError::DatabaseIntegrity(_) => (StatusCode::BAD_REQUEST, "INTEGRITY_VIOLATION"),
            ShopError::Notification(_) => (StatusCode::BAD_REQUEST, "NOTIFICATION_FAILED"),
            ShopError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ShopError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            ShopError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            ShopError::Crypto(_) | ShopError::Io(_) | ShopError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }

    /// Client-facing message; server faults are not echoed back
    fn public_message(&self) -> String {
        match self {
            ShopError::Database(_) => "Database operation failed".to_string(),
            ShopError::Jwt(_) => "Invalid or expired token".to_string(),
            ShopError::Config(_) | ShopError::Crypto(_) | ShopError::Io(_) | ShopError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Render the error body for a given request path
    pub fn error_response_at(&self, path: &str) -> HttpResponse {
        let (status, code) = self.classify();
        if status.is_server_error() {
            error!("Request to {} failed: {}", path, self);
        }

        let body = ErrorResponse {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: code.to_string(),
            message: self.public_message(),
            path: path.to_string(),
            errors: self.field_errors().to_vec(),
        };

        HttpResponse::build(status).json(body)
    }
}

impl ResponseError for ShopError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    // The path is stamped in afterwards by `ErrorPathMiddleware`.
    fn error_response(&self) -> HttpResponse {
        self.error_response_at("")
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldMessage>,
}
