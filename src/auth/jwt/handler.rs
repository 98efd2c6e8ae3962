//! Core JWT handler implementation

use super::types::{Claims, JwtHandler};
use crate::config::AuthConfig;
use crate::core::models::User;
use crate::utils::error::{Result, ShopError};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
            issuer: config.jwt_issuer.clone(),
        }
    }

    /// Create an access token for a user
    pub fn create_access_token(&self, user: &User) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ShopError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: user.email.clone(),
            authorities: user.authorities(),
            iat: now,
            exp: now + self.expiration,
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(ShopError::Jwt)?;

        debug!("Created access token for user: {}", user.email);
        Ok(token)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            ShopError::Jwt(e)
        })?;

        debug!("Token verified for user: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }
}
