//! Product endpoints

use crate::auth::require_authority;
use crate::core::dto::{CategorySearchQuery, ProductDto, ProductSearchQuery};
use crate::core::models::Authority;
use crate::core::pagination::{PageParams, PageRequest};
use crate::server::extract::AuthenticatedUser;
use crate::server::routes::created;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};

/// Configure product routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(search_products))
            .route("", web::post().to(insert_product))
            .route("/categories", web::get().to(search_products_with_categories))
            .route("/{id}", web::get().to(find_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}

async fn search_products(
    state: web::Data<AppState>,
    query: web::Query<ProductSearchQuery>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let request = PageRequest::try_from(params.into_inner())?;
    let page = state.catalog.search_products(&query.name, &request).await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn search_products_with_categories(
    state: web::Data<AppState>,
    query: web::Query<CategorySearchQuery>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let request = PageRequest::try_from(params.into_inner())?;
    let page = state
        .catalog
        .search_products_with_categories(&query.category_ids, &query.name, &request)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn find_product(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let product = state.catalog.find_product(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

async fn insert_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    body: web::Json<ProductDto>,
) -> Result<HttpResponse> {
    require_authority(&me, Authority::Admin)?;

    let product = state.catalog.insert_product(body.into_inner()).await?;
    let id = product.id.unwrap_or_default();
    Ok(created(&req, id, product))
}

async fn update_product(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    path: web::Path<i64>,
    body: web::Json<ProductDto>,
) -> Result<HttpResponse> {
    require_authority(&me, Authority::Admin)?;

    let product = state
        .catalog
        .update_product(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

async fn delete_product(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    require_authority(&me, Authority::Admin)?;

    state.catalog.delete_product(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
