//! Authentication and security utilities

pub mod crypto;
