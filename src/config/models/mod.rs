//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod auth;
pub mod mail;
pub mod recovery;
pub mod server;
pub mod shop;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use mail::*;
pub use recovery::*;
pub use server::*;
pub use shop::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_database_url() -> String {
    "sqlite://data/shop.db?mode=rwc".to_string()
}

pub fn default_jwt_expiration() -> u64 {
    86400 // 24 hours
}

pub fn default_jwt_issuer() -> String {
    "shop-backend".to_string()
}

pub fn default_token_minutes() -> i64 {
    30
}

pub fn default_recover_uri() -> String {
    "http://localhost:5173/recover-password/".to_string()
}

pub fn default_mail_from() -> String {
    "no-reply@shop.local".to_string()
}

pub fn default_true() -> bool {
    true
}
