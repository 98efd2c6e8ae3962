//! Order endpoints

use crate::auth::require_any_authority;
use crate::core::dto::OrderRequest;
use crate::core::models::Authority;
use crate::server::extract::AuthenticatedUser;
use crate::server::routes::created;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};

/// Configure order routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(insert_order))
            .route("/{id}", web::get().to(find_order)),
    );
}

async fn find_order(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    require_any_authority(&me, &[Authority::Admin, Authority::Client])?;

    let order = state.orders.find_by_id(&me, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(order))
}

async fn insert_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse> {
    require_any_authority(&me, &[Authority::Admin, Authority::Client])?;

    let order = state.orders.insert(&me, body.into_inner()).await?;
    Ok(created(&req, order.id, order))
}
