//! Integration tests for shop-backend
//!
//! These tests run the services and HTTP layer against a real in-memory
//! SQLite database.

pub mod api_tests;
pub mod config_tests;
pub mod database_tests;
pub mod order_tests;
pub mod user_tests;
