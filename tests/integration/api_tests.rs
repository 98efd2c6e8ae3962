//! HTTP API integration tests
//!
//! Requests run against the full application, middleware included, on top of
//! an in-memory database.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::{self, BOOKS, PASSWORD};
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use shop_backend::Config;
    use shop_backend::core::models::User;
    use shop_backend::server::{AppState, HttpServer};
    use shop_backend::services::LogMailer;
    use shop_backend::utils::error::ErrorResponse;
    use std::sync::Arc;

    async fn setup() -> (TestDatabase, web::Data<AppState>) {
        let db = TestDatabase::new().await;
        let state = AppState::new(
            Config::default(),
            db.db().clone(),
            Arc::new(LogMailer::new("no-reply@shop.local")),
        );
        (db, web::Data::new(state))
    }

    fn bearer(state: &AppState, user: &User) -> (header::HeaderName, String) {
        let token = state.jwt.create_access_token(user).unwrap();
        (header::AUTHORIZATION, format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_health() {
        let (_db, state) = setup().await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "up");
    }

    #[actix_web::test]
    async fn test_login_issues_token_for_valid_credentials() {
        let (db, state) = setup().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"username": "maria@gmail.com", "password": PASSWORD}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["token_type"], "Bearer");
        let claims = state
            .jwt
            .verify_token(body["access_token"].as_str().unwrap())
            .unwrap();
        assert_eq!(claims.sub, "maria@gmail.com");
        assert_eq!(claims.authorities, maria.authorities());
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_password_and_unknown_user() {
        let (db, state) = setup().await;
        fixtures::client(db.db(), "maria@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        for (username, password) in [("maria@gmail.com", "wrong-password"), ("ghost@gmail.com", PASSWORD)] {
            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({"username": username, "password": password}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.message, "Bad credentials");
        }
    }

    #[actix_web::test]
    async fn test_me_requires_token() {
        let (db, state) = setup().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = test::TestRequest::get().uri("/users/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.path, "/users/me");
        assert_eq!(body.message, "Full authentication is required");

        let req = test::TestRequest::get()
            .uri("/users/me")
            .insert_header(bearer(&state, &maria))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "maria@gmail.com");
        assert_eq!(body["roles"][0]["authority"], "ROLE_CLIENT");
        assert!(body.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_garbage_token_is_unauthorized() {
        let (_db, state) = setup().await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/users/me")
            .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_product_creation_is_admin_only() {
        let (db, state) = setup().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let payload = json!({
            "name": "Kindle Paperwhite",
            "description": "E-reader with a glare-free display",
            "price": 139.9,
            "imgUrl": "https://img.shop.local/kindle.jpg",
            "categories": [{"id": 2}]
        });

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(bearer(&state, &maria))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(bearer(&state, &alex))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body: Value = test::read_body_json(resp).await;
        let id = body["id"].as_i64().unwrap();
        assert_eq!(location, format!("/products/{}", id));
        assert_eq!(body["categories"][0]["name"], "Electronics");

        let req = test::TestRequest::get().uri(&location).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Kindle Paperwhite");
    }

    #[actix_web::test]
    async fn test_invalid_product_lists_field_errors() {
        let (db, state) = setup().await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/products")
            .insert_header(bearer(&state, &alex))
            .set_json(json!({"name": "TV", "description": "short", "price": -1.0, "categories": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = test::read_body_json(resp).await;
        let fields: Vec<&str> = body.errors.iter().map(|f| f.field_name.as_str()).collect();
        for field in ["name", "description", "price", "categories"] {
            assert!(fields.contains(&field), "missing {} in {:?}", field, fields);
        }
    }

    #[actix_web::test]
    async fn test_product_search_pages() {
        let (db, state) = setup().await;
        fixtures::product(db.db(), "The Lord of the Rings", 90.5, &[BOOKS]).await;
        fixtures::product(db.db(), "Smart TV", 2190.0, &[2]).await;
        fixtures::product(db.db(), "Macbook Pro", 1250.0, &[3]).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/products?name=ma&size=1&sort=name,desc")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalElements"], 2);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["content"][0]["name"], "Smart TV");

        let req = test::TestRequest::get().uri("/products?sort=bogus").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.errors[0].field_name, "sort");

        let req = test::TestRequest::get()
            .uri("/products?page=4611686018427387904")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.errors[0].field_name, "page");
    }

    #[actix_web::test]
    async fn test_order_lifecycle_over_http() {
        let (db, state) = setup().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let bob = fixtures::client(db.db(), "bob@gmail.com").await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let book = fixtures::product(db.db(), "Dune", 40.0, &[BOOKS]).await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .insert_header(bearer(&state, &maria))
            .set_json(json!({"items": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.errors[0].field_name, "items");

        let req = test::TestRequest::post()
            .uri("/orders")
            .insert_header(bearer(&state, &maria))
            .set_json(json!({"items": [{"productId": book.id, "quantity": 3}]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let order_id = body["id"].as_i64().unwrap();
        assert_eq!(body["status"], "WAITING_PAYMENT");
        assert_eq!(body["total"], 120.0);

        let req = test::TestRequest::get()
            .uri(&format!("/orders/{}", order_id))
            .insert_header(bearer(&state, &bob))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri(&format!("/orders/{}", order_id))
            .insert_header(bearer(&state, &alex))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/products/{}", book.id))
            .insert_header(bearer(&state, &alex))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "Referential integrity failure");
    }

    #[actix_web::test]
    async fn test_registration_is_public() {
        let (_db, state) = setup().await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({
                "name": "Ana Silva",
                "email": "ana@gmail.com",
                "phone": "977777777",
                "birthDate": "1990-01-15",
                "password": "secret-password"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["roles"][0]["authority"], "ROLE_CLIENT");
    }

    #[actix_web::test]
    async fn test_password_recovery_errors() {
        let (_db, state) = setup().await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/auth/recover-token")
            .set_json(json!({"email": "ghost@gmail.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/auth/new-password")
            .set_json(json!({"token": "no-such-token", "password": "new-password"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "Invalid token");
    }

    #[actix_web::test]
    async fn test_recover_token_is_issued_for_known_email() {
        let (db, state) = setup().await;
        fixtures::client(db.db(), "maria@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/auth/recover-token")
            .set_json(json!({"email": "maria@gmail.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_malformed_input_is_bad_request() {
        let (db, state) = setup().await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.path, "/auth/login");

        let req = test::TestRequest::get()
            .uri("/users/abc")
            .insert_header(bearer(&state, &alex))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_user_directory_is_admin_only() {
        let (db, state) = setup().await;
        let maria = fixtures::client(db.db(), "maria@gmail.com").await;
        let alex = fixtures::admin(db.db(), "alex@gmail.com").await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(bearer(&state, &maria))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/users?sort=email")
            .insert_header(bearer(&state, &alex))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalElements"], 2);
        assert_eq!(body["content"][0]["email"], "alex@gmail.com");
    }
}
