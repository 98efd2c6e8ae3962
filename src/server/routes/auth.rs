//! Authentication endpoints: login and password recovery

use crate::core::dto::{EmailDto, LoginRequest, NewPasswordDto, TokenResponse};
use crate::server::state::AppState;
use crate::utils::auth::crypto::verify_password;
use crate::utils::error::{Result, ShopError};
use actix_web::{HttpResponse, web};
use tracing::{info, warn};
use validator::Validate;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/recover-token", web::post().to(create_recover_token))
            .route("/new-password", web::put().to(save_new_password)),
    );
}

/// Exchange email and password for a bearer token
async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let user = state.db.find_user_by_email(&request.username).await?;
    let authenticated = match &user {
        Some(user) => verify_password(&request.password, &user.password_hash)?,
        None => false,
    };
    let user = match user {
        Some(user) if authenticated => user,
        _ => {
            warn!("Failed login for {}", request.username);
            return Err(ShopError::unauthorized("Bad credentials"));
        }
    };

    let access_token = state.jwt.create_access_token(&user)?;
    info!("User {} logged in", user.id);

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt.get_expiration(),
    }))
}

async fn create_recover_token(
    state: web::Data<AppState>,
    body: web::Json<EmailDto>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    body.validate()?;

    state.recovery.create_recover_token(&body.email).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn save_new_password(
    state: web::Data<AppState>,
    body: web::Json<NewPasswordDto>,
) -> Result<HttpResponse> {
    let body = body.into_inner();
    body.validate()?;

    state
        .recovery
        .save_new_password(&body.token, &body.password)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
