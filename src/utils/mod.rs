//! Utility modules for the shop backend
//!
//! - **auth**: password hashing and token generation
//! - **error**: error types and their HTTP rendering

pub mod auth;
pub mod error;
