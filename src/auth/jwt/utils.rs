//! JWT utility functions

use super::types::JwtHandler;

impl JwtHandler {
    /// Extract token from an Authorization header value
    pub fn extract_token_from_header(header_value: &str) -> Option<&str> {
        header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Get token expiration time
    pub fn get_expiration(&self) -> u64 {
        self.expiration
    }
}
