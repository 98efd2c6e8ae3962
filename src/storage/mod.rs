//! Storage layer for the shop
//!
//! This module provides data persistence through SeaORM.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType};
