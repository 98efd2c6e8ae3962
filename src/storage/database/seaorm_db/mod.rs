// Module declarations
mod category_ops;
mod connection;
mod order_ops;
mod product_ops;
mod token_ops;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
