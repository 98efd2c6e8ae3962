//! Category endpoints

use crate::core::pagination::{PageParams, PageRequest};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Configure category routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(list_categories))
            .route("/{id}/products", web::get().to(products_by_category)),
    );
}

async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let categories = state.catalog.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

async fn products_by_category(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let request = PageRequest::try_from(params.into_inner())?;
    let page = state
        .catalog
        .products_by_category(path.into_inner(), &request)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}
