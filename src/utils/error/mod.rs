//! Error handling for the shop backend
//!
//! This module defines all error types used throughout the service and how
//! they are rendered at the HTTP boundary.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{FieldMessage, Result, ShopError};
