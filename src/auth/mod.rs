//! Authentication and authorization
//!
//! Bearer token handling, principal resolution, role guards and the
//! password recovery flow.

pub mod access;
pub mod jwt;
pub mod recovery;
pub mod resolver;

pub use access::{ensure_self_or_admin, require_any_authority, require_authority};
pub use jwt::{Claims, JwtHandler};
pub use recovery::RecoveryService;
pub use resolver::AuthResolver;
