//! User service and principal resolution integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_field_error;
    use crate::common::fixtures::{self, BOOKS, ROLE_ADMIN_ID, ROLE_CLIENT_ID};
    use crate::common::TestDatabase;
    use shop_backend::ShopError;
    use shop_backend::auth::AuthResolver;
    use shop_backend::core::dto::{OrderItemRequest, OrderRequest, RoleDto, UserInsertDto, UserUpdateDto};
    use shop_backend::core::models::{Authority, NewUser, UserChanges};
    use shop_backend::core::pagination::{Direction, PageRequest};
    use shop_backend::services::{OrderService, UserService};
    use shop_backend::utils::auth::crypto::verify_password;

    fn registration(email: &str) -> UserInsertDto {
        UserInsertDto {
            name: "Ana Silva".to_string(),
            email: email.to_string(),
            phone: "977777777".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(1990, 1, 15),
            password: "secret-password".to_string(),
        }
    }

    fn changes(name: &str, email: &str, role_ids: &[i64]) -> UserUpdateDto {
        UserUpdateDto {
            name: name.to_string(),
            email: email.to_string(),
            phone: "966666666".to_string(),
            birth_date: None,
            password: "changed-password".to_string(),
            roles: role_ids
                .iter()
                .map(|&id| RoleDto {
                    id,
                    authority: String::new(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_registration_assigns_client_role() {
        let db = TestDatabase::new().await;
        let users = UserService::new(db.db_arc());

        let created = users.insert(registration("ana@gmail.com")).await.unwrap();
        assert_eq!(created.roles.len(), 1);
        assert_eq!(created.roles[0].authority, "ROLE_CLIENT");

        let stored = db.db().find_user_by_email("ana@gmail.com").await.unwrap().unwrap();
        assert!(verify_password("secret-password", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_field_error() {
        let db = TestDatabase::new().await;
        fixtures::client(db.db(), "ana@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let err = users.insert(registration("ana@gmail.com")).await.unwrap_err();
        assert_field_error(&err, "email");
    }

    #[tokio::test]
    async fn test_invalid_registration_is_rejected() {
        let db = TestDatabase::new().await;
        let users = UserService::new(db.db_arc());

        let mut dto = registration("not-an-email");
        dto.password = "short".to_string();
        dto.name = "  ".to_string();

        let err = users.insert(dto).await.unwrap_err();
        assert_field_error(&err, "email");
        assert_field_error(&err, "password");
        assert_field_error(&err, "name");
    }

    #[tokio::test]
    async fn test_client_updates_self() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let updated = users
            .update(&maria, maria.id, changes("Maria B.", "maria@gmail.com", &[ROLE_CLIENT_ID]))
            .await
            .unwrap();
        assert_eq!(updated.name, "Maria B.");
        assert_eq!(updated.phone, "966666666");

        let stored = db.db().find_user_by_id(maria.id).await.unwrap().unwrap();
        assert!(verify_password("changed-password", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_client_cannot_update_someone_else() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let bob = fixtures::client(db.db(), "bob@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let err = users
            .update(&maria, bob.id, changes("Hacked", "bob@gmail.com", &[ROLE_CLIENT_ID]))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::Forbidden(_)));

        let stored = db.db().find_user_by_id(bob.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Client User");
    }

    #[tokio::test]
    async fn test_admin_updates_anyone_and_replaces_roles() {
        let db = TestDatabase::new().await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let bob = fixtures::client(db.db(), "bob@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let updated = users
            .update(&alex, bob.id, changes("Bob", "bob@gmail.com", &[ROLE_ADMIN_ID, ROLE_CLIENT_ID]))
            .await
            .unwrap();
        let authorities: Vec<&str> = updated.roles.iter().map(|r| r.authority.as_str()).collect();
        assert_eq!(authorities, vec!["ROLE_CLIENT", "ROLE_ADMIN"]);

        let reloaded = users.find_by_id(bob.id).await.unwrap();
        let role_ids: Vec<i64> = reloaded.roles.iter().map(|r| r.id).collect();
        assert_eq!(role_ids, vec![ROLE_CLIENT_ID, ROLE_ADMIN_ID]);

        let updated = users
            .update(&alex, bob.id, changes("Bob", "bob@gmail.com", &[ROLE_ADMIN_ID]))
            .await
            .unwrap();
        assert_eq!(updated.roles.len(), 1);
        assert_eq!(updated.roles[0].authority, "ROLE_ADMIN");
    }

    #[tokio::test]
    async fn test_client_cannot_grant_admin_to_self() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let err = users
            .update(&maria, maria.id, changes("Maria", "maria@gmail.com", &[ROLE_CLIENT_ID, ROLE_ADMIN_ID]))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_update_email_uniqueness_excludes_self() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        fixtures::client(db.db(), "bob@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let err = users
            .update(&maria, maria.id, changes("Maria", "bob@gmail.com", &[ROLE_CLIENT_ID]))
            .await
            .unwrap_err();
        assert_field_error(&err, "email");

        let updated = users
            .update(&maria, maria.id, changes("Maria", "maria@gmail.com", &[ROLE_CLIENT_ID]))
            .await
            .unwrap();
        assert_eq!(updated.email, "maria@gmail.com");
    }

    #[tokio::test]
    async fn test_unique_email_index_reports_email_field() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        fixtures::client(db.db(), "bob@gmail.com").await;

        let err = db
            .db()
            .create_user(
                NewUser {
                    name: "Maria Twin".to_string(),
                    email: "maria@gmail.com".to_string(),
                    phone: "955555555".to_string(),
                    birth_date: None,
                    password_hash: fixtures::password_hash(),
                },
                Authority::Client,
            )
            .await
            .unwrap_err();
        assert_field_error(&err, "email");

        let err = db
            .db()
            .update_user(
                maria.id,
                UserChanges {
                    name: maria.name.clone(),
                    email: "bob@gmail.com".to_string(),
                    phone: maria.phone.clone(),
                    birth_date: maria.birth_date,
                    password_hash: fixtures::password_hash(),
                    role_ids: vec![ROLE_CLIENT_ID],
                },
            )
            .await
            .unwrap_err();
        assert_field_error(&err, "email");

        let stored = db.db().find_user_by_id(maria.id).await.unwrap().unwrap();
        assert_eq!(stored.email, "maria@gmail.com");
    }

    #[tokio::test]
    async fn test_update_missing_user_or_role_is_not_found() {
        let db = TestDatabase::new().await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let users = UserService::new(db.db_arc());

        let err = users
            .update(&alex, 500, changes("Ghost", "ghost@gmail.com", &[ROLE_CLIENT_ID]))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));

        let err = users
            .update(&alex, alex.id, changes("Alex", "alex@gmail.com", &[ROLE_ADMIN_ID, 42]))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_all_pages_and_sorts() {
        let db = TestDatabase::new().await;
        fixtures::user_with(db.db(), "Carla", "carla@gmail.com", Authority::Client).await;
        fixtures::user_with(db.db(), "Alex", "alex@gmail.com", Authority::Admin).await;
        fixtures::user_with(db.db(), "Bruno", "bruno@gmail.com", Authority::Client).await;
        let users = UserService::new(db.db_arc());

        let request = PageRequest::new(0, 2).with_sort("name", Direction::Asc);
        let page = users.list_all(&request).await.unwrap();
        let names: Vec<&str> = page.content.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Bruno"]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content[0].roles[0].authority, "ROLE_ADMIN");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let db = TestDatabase::new().await;
        let bob = fixtures::client(db.db(), "bob@gmail.com").await;
        let users = UserService::new(db.db_arc());

        users.delete_by_id(bob.id).await.unwrap();
        assert!(matches!(users.find_by_id(bob.id).await, Err(ShopError::NotFound(_))));
        assert!(matches!(users.delete_by_id(bob.id).await, Err(ShopError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_user_with_orders_is_integrity_violation() {
        let db = TestDatabase::new().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        OrderService::new(db.db_arc())
            .insert(
                &maria,
                OrderRequest {
                    items: vec![OrderItemRequest {
                        product_id: book.id,
                        quantity: 1,
                    }],
                },
            )
            .await
            .unwrap();
        let users = UserService::new(db.db_arc());

        let err = users.delete_by_id(maria.id).await.unwrap_err();
        assert!(matches!(err, ShopError::DatabaseIntegrity(_)));
        assert!(users.find_by_id(maria.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_resolver_loads_roles_or_fails_with_401() {
        let db = TestDatabase::new().await;
        fixtures::admin(db.db(), "alex@gmail.com").await;
        let resolver = AuthResolver::new(db.db_arc());

        let user = resolver.resolve("alex@gmail.com").await.unwrap();
        assert!(user.is_admin());

        let err = resolver.resolve("ghost@gmail.com").await.unwrap_err();
        assert!(matches!(err, ShopError::AuthenticationLookup(_)));
    }
}
