//! Application state shared across HTTP handlers

use crate::auth::{AuthResolver, JwtHandler, RecoveryService};
use crate::config::Config;
use crate::services::{CatalogService, Mailer, OrderService, UserService};
use crate::storage::Database;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Services hold their own `Arc` to the database, so cloning the state per
/// worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Shop configuration (shared read-only)
    pub config: Arc<Config>,
    /// Database gateway
    pub db: Arc<Database>,
    /// Bearer token issuer and verifier
    pub jwt: Arc<JwtHandler>,
    pub resolver: AuthResolver,
    pub recovery: RecoveryService,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub users: UserService,
}

impl AppState {
    /// Wire every service around one database and one mailer
    pub fn new(config: Config, db: Database, mailer: Arc<dyn Mailer>) -> Self {
        let db = Arc::new(db);
        let jwt = Arc::new(JwtHandler::new(config.auth()));
        let recovery = RecoveryService::new(db.clone(), mailer, config.recovery().clone());

        Self {
            resolver: AuthResolver::new(db.clone()),
            catalog: CatalogService::new(db.clone()),
            orders: OrderService::new(db.clone()),
            users: UserService::new(db.clone()),
            config: Arc::new(config),
            db,
            jwt,
            recovery,
        }
    }

    /// Get shop configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
