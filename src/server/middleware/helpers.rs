//! Helper functions for middleware and extractors

use crate::auth::JwtHandler;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Bearer token from the Authorization header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(JwtHandler::extract_token_from_header)
}
