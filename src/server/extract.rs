//! Request extractors

use crate::core::models::User;
use crate::server::middleware::bearer_token;
use crate::server::state::AppState;
use crate::utils::error::ShopError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::LocalBoxFuture;
use std::ops::Deref;
use tracing::debug;

/// The caller behind a valid bearer token, loaded with roles.
///
/// Handlers that take this argument reject anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ShopError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req.headers()).map(str::to_string);

        Box::pin(async move {
            let state =
                state.ok_or_else(|| ShopError::internal("Application state is not configured"))?;
            let token = token
                .ok_or_else(|| ShopError::unauthorized("Full authentication is required"))?;

            let claims = state.jwt.verify_token(&token)?;
            let user = state.resolver.resolve(&claims.sub).await?;

            debug!("Authenticated user {}", user.id);
            Ok(AuthenticatedUser(user))
        })
    }
}
