#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use user_management::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Inserts a user row directly, bypassing the service layer.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, phone_number, phone_prefix, role)
        VALUES ($1, $2, '5012345', '_050', 'USER')
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
