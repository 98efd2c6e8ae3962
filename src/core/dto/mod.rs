//! Request and response bodies
//!
//! Field names serialize in camelCase. Request bodies carry `validator` rules whose
//! messages surface as `errors[].message` in a 422 response.

pub mod auth;
pub mod catalog;
pub mod order;
pub mod user;

pub use auth::*;
pub use catalog::*;
pub use order::*;
pub use user::*;

use validator::ValidationError;

/// Reject empty or whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
