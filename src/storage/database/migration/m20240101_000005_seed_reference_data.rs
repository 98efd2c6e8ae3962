//! Roles and starter categories

use sea_orm_migration::prelude::*;

const ROLES: [&str; 2] = ["ROLE_CLIENT", "ROLE_ADMIN"];
const CATEGORIES: [&str; 3] = ["Books", "Electronics", "Computers"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut roles = Query::insert();
        roles.into_table(Roles::Table).columns([Roles::Authority]);
        for authority in ROLES {
            roles.values_panic([authority.into()]);
        }
        manager.exec_stmt(roles.to_owned()).await?;

        let mut categories = Query::insert();
        categories
            .into_table(Categories::Table)
            .columns([Categories::Name]);
        for name in CATEGORIES {
            categories.values_panic([name.into()]);
        }
        manager.exec_stmt(categories.to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Categories::Table)
                    .and_where(Expr::col(Categories::Name).is_in(CATEGORIES))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Roles::Table)
                    .and_where(Expr::col(Roles::Authority).is_in(ROLES))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Authority,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Name,
}
