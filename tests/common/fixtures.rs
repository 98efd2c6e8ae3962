//! Test fixtures
//!
//! Rows are written through the real persistence gateway.

use shop_backend::core::models::{Authority, NewUser, Product, ProductDraft, User};
use shop_backend::storage::Database;
use shop_backend::utils::auth::crypto::hash_password;
use std::sync::OnceLock;

pub const BOOKS: i64 = 1;
pub const ELECTRONICS: i64 = 2;
pub const COMPUTERS: i64 = 3;

pub const ROLE_CLIENT_ID: i64 = 1;
pub const ROLE_ADMIN_ID: i64 = 2;

/// Password every fixture user logs in with
pub const PASSWORD: &str = "123456789";

/// Argon2 is slow in debug builds, so the fixture hash is computed once
pub fn password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(PASSWORD).expect("hash fixture password"))
        .clone()
}

pub async fn user_with(db: &Database, name: &str, email: &str, authority: Authority) -> User {
    db.create_user(
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            phone: "988888888".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(2001, 7, 25),
            password_hash: password_hash(),
        },
        authority,
    )
    .await
    .expect("create fixture user")
}

pub async fn client(db: &Database, email: &str) -> User {
    user_with(db, "Client User", email, Authority::Client).await
}

pub async fn admin(db: &Database, email: &str) -> User {
    user_with(db, "Admin User", email, Authority::Admin).await
}

pub fn draft(name: &str, price: f64, category_ids: &[i64]) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: format!("{} - a fine product for testing", name),
        price,
        img_url: Some(format!("https://img.shop.local/{}.jpg", name.replace(' ', "-"))),
        category_ids: category_ids.to_vec(),
    }
}

pub async fn product(db: &Database, name: &str, price: f64, category_ids: &[i64]) -> Product {
    db.create_product(draft(name, price, category_ids))
        .await
        .expect("create fixture product")
}
