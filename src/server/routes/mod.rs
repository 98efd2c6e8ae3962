//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by resource.

pub mod auth;
pub mod categories;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

/// Register every route
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(categories::configure_routes)
        .configure(products::configure_routes)
        .configure(orders::configure_routes)
        .configure(users::configure_routes);
}

/// 201 with a Location header pointing at `{request path}/{id}`
pub(crate) fn created<T: Serialize>(req: &HttpRequest, id: i64, body: T) -> HttpResponse {
    let location = format!("{}/{}", req.path().trim_end_matches('/'), id);
    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(body)
}
