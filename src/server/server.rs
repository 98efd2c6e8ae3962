//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::middleware::ErrorPathMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::mail;
use crate::storage::Database;
use crate::utils::error::{Result, ShopError};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    error::{JsonPayloadError, PathError, QueryPayloadError},
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::time::Duration;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Connect the database, run migrations when configured and build the state
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let db = Database::new(config.database()).await?;
        if config.database().migrate_on_start {
            db.migrate().await?;
        }

        let mailer = mail::from_config(config.mail())?;
        let state = AppState::new(config.clone(), db, mailer);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = state.config.server();
        let cors = build_cors(server_config);
        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .error_handler(|err: JsonPayloadError, _req| {
                ShopError::bad_request(format!("Malformed JSON body: {}", err)).into()
            });
        let query_config = web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req| {
            ShopError::bad_request(format!("Invalid query string: {}", err)).into()
        });
        let path_config = web::PathConfig::default().error_handler(|err: PathError, _req| {
            ShopError::bad_request(format!("Invalid path parameter: {}", err)).into()
        });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .app_data(query_config)
            .app_data(path_config)
            .wrap(ErrorPathMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "shop-backend")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .client_request_timeout(Duration::from_secs(self.config.timeout));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| ShopError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await.map_err(ShopError::Io)?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

fn build_cors(server_config: &ServerConfig) -> Cors {
    let cors_config = &server_config.cors;
    let mut cors = Cors::default();

    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
        cors_config.validate().unwrap_or_else(|e| {
            warn!(error = %e, "CORS Configuration Warning");
        });
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
