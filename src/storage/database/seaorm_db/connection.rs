use crate::config::DatabaseConfig;
use crate::utils::error::{Result, ShopError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection with automatic SQLite fallback
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        match Self::try_connect(&config.url, config).await {
            Ok(db) => {
                let backend_type = if config.is_postgres() {
                    DatabaseBackendType::PostgreSQL
                } else {
                    DatabaseBackendType::SQLite
                };
                info!("Database connection established ({:?})", backend_type);
                Ok(Self { db, backend_type })
            }
            Err(e) => {
                if config.is_postgres() {
                    warn!(
                        "PostgreSQL connection failed: {}. Attempting SQLite fallback...",
                        e
                    );
                    Self::fallback_to_sqlite(config).await
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Wrap an existing connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let backend_type = match db.get_database_backend() {
            DbBackend::Postgres => DatabaseBackendType::PostgreSQL,
            _ => DatabaseBackendType::SQLite,
        };
        Self { db, backend_type }
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(config.sql_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(ShopError::Database)
    }

    /// Fallback to a local SQLite database
    async fn fallback_to_sqlite(config: &DatabaseConfig) -> Result<Self> {
        let data_dir = std::path::Path::new("data");
        if !data_dir.exists() {
            std::fs::create_dir_all(data_dir).map_err(|e| {
                ShopError::Internal(format!("Failed to create data directory: {}", e))
            })?;
        }

        let sqlite_path = "sqlite://data/shop.db?mode=rwc";
        info!("Falling back to SQLite database: {}", sqlite_path);

        let db = Self::try_connect(sqlite_path, config).await?;

        info!("SQLite fallback connection established successfully");
        Ok(Self {
            db,
            backend_type: DatabaseBackendType::SQLite,
        })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            ShopError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::Role::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(ShopError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}
