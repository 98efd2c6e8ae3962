//! Database connection and migration integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::database::test_db_config;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use shop_backend::storage::database::entities;
    use shop_backend::storage::{Database, DatabaseBackendType};

    #[tokio::test]
    async fn test_migrations_seed_reference_data() {
        let db = TestDatabase::new().await;

        let roles = entities::Role::find().all(db.db().connection()).await.unwrap();
        let authorities: Vec<&str> = roles.iter().map(|r| r.authority.as_str()).collect();
        assert_eq!(authorities, vec!["ROLE_CLIENT", "ROLE_ADMIN"]);

        let categories = entities::Category::find()
            .count(db.db().connection())
            .await
            .unwrap();
        assert_eq!(categories, 3);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = TestDatabase::new().await;
        db.db().migrate().await.unwrap();

        let roles = entities::Role::find()
            .count(db.db().connection())
            .await
            .unwrap();
        assert_eq!(roles, 2);
    }

    #[tokio::test]
    async fn test_health_check() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    }

    #[tokio::test]
    async fn test_health_check_fails_before_migration() {
        let db = Database::new(&test_db_config()).await.unwrap();
        assert!(db.health_check().await.is_err());
    }
}
