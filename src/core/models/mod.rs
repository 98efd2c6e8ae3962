//! Core data models for the shop
//!
//! Domain types returned by the persistence gateway and consumed by the services.

pub mod catalog;
pub mod order;
pub mod recovery;
pub mod user;

pub use catalog::*;
pub use order::*;
pub use recovery::*;
pub use user::*;
