//! HTTP middleware implementations
//!
//! - Error path stamping for `ShopError` responses
//! - Header helpers shared by extractors

mod error_path;
mod helpers;


pub use error_path::{ErrorPathMiddleware, ErrorPathMiddlewareService};
pub use helpers::bearer_token;
