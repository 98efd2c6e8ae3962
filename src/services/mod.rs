//! Services module
//!
//! Business logic sitting between the HTTP handlers and the database.

pub mod catalog;
pub mod mail;
pub mod order;
pub mod user;

pub use catalog::CatalogService;
pub use mail::{HttpRelayMailer, LogMailer, MailMessage, Mailer};
pub use order::OrderService;
pub use user::UserService;
