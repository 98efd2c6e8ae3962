//! Core domain types of the shop
//!
//! Domain models, request/response DTOs and paging primitives.

pub mod dto;
pub mod models;
pub mod pagination;
