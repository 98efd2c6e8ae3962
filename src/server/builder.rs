//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ShopError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ShopError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build and run the server until it stops
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build().await?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API endpoints:");
    info!("   GET  /health");
    info!("   POST /auth/login | /auth/recover-token, PUT /auth/new-password");
    info!("   GET  /categories, /categories/{{id}}/products");
    info!("   *    /products, /orders, /users");

    server.start().await
}
