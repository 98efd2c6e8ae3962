//! # shop-backend
//!
//! An e-commerce backend: product catalog, order placement, user accounts and
//! password recovery, served as a JSON REST API.
//!
//! ## Running
//!
//! ```rust,no_run
//! use shop_backend::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/shop.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use storage::Database;
pub use utils::error::{Result, ShopError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
