//! Key and token generation utilities

use rand::{Rng, distributions::Alphanumeric};
use uuid::Uuid;

/// Generate a JWT secret
pub fn generate_jwt_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Generate an opaque password recovery token (random UUID v4)
pub fn generate_recovery_token() -> String {
    Uuid::new_v4().to_string()
}
