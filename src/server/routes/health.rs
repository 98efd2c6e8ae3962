//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    database: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}

/// Report service and database health; 503 when the database does not answer
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let database_up = match state.db.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database health check failed: {}", e);
            false
        }
    };

    let status = HealthStatus {
        status: Cow::Borrowed(if database_up { "healthy" } else { "unhealthy" }),
        database: Cow::Borrowed(if database_up { "up" } else { "down" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    if database_up {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::ServiceUnavailable().json(status)
    }
}
