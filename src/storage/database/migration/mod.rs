use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_tables;
mod m20240101_000002_create_catalog_tables;
mod m20240101_000003_create_order_tables;
mod m20240101_000004_create_password_recover_table;
mod m20240101_000005_seed_reference_data;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_tables::Migration),
            Box::new(m20240101_000002_create_catalog_tables::Migration),
            Box::new(m20240101_000003_create_order_tables::Migration),
            Box::new(m20240101_000004_create_password_recover_table::Migration),
            Box::new(m20240101_000005_seed_reference_data::Migration),
        ]
    }
}
