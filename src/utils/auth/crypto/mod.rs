//! Cryptographic helpers: password hashing and random token generation

mod keys;
mod password;

pub use keys::{generate_jwt_secret, generate_recovery_token};
pub use password::{hash_password, verify_password};
