//! User endpoints

use crate::auth::{require_any_authority, require_authority};
use crate::core::dto::{UserInsertDto, UserUpdateDto};
use crate::core::models::Authority;
use crate::core::pagination::{PageParams, PageRequest};
use crate::server::extract::AuthenticatedUser;
use crate::server::routes::created;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(insert_user))
            .route("/me", web::get().to(get_me))
            .route("/{id}", web::get().to(find_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

async fn get_me(state: web::Data<AppState>, me: AuthenticatedUser) -> Result<HttpResponse> {
    require_any_authority(&me, &[Authority::Admin, Authority::Client])?;
    Ok(HttpResponse::Ok().json(state.users.get_me(&me)))
}

async fn list_users(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    params: web::Query<PageParams>,
) -> Result<HttpResponse> {
    require_authority(&me, Authority::Admin)?;

    let request = PageRequest::try_from(params.into_inner())?;
    let page = state.users.list_all(&request).await?;
    Ok(HttpResponse::Ok().json(page))
}

async fn find_user(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    require_authority(&me, Authority::Admin)?;

    let user = state.users.find_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

async fn insert_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<UserInsertDto>,
) -> Result<HttpResponse> {
    let user = state.users.insert(body.into_inner()).await?;
    Ok(created(&req, user.id, user))
}

async fn update_user(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    path: web::Path<i64>,
    body: web::Json<UserUpdateDto>,
) -> Result<HttpResponse> {
    let user = state
        .users
        .update(&me, path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

async fn delete_user(
    state: web::Data<AppState>,
    me: AuthenticatedUser,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    require_authority(&me, Authority::Admin)?;

    state.users.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
