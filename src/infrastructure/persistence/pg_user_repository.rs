//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, PhonePrefix, Role, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user storage and retrieval.
///
/// Queries are bound at runtime; enum fields are stored as their canonical
/// string form (`"_050"`, `"USER"`) and parsed back on read.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Raw row shape as stored; converted into the domain entity after parsing
/// the enum columns.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    phone_prefix: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AppError> {
        let phone_prefix = PhonePrefix::parse(&self.phone_prefix).ok_or_else(|| {
            AppError::internal(
                "Unknown phone prefix stored for user",
                json!({ "id": self.id, "phone_prefix": self.phone_prefix }),
            )
        })?;
        let role = Role::parse(&self.role).ok_or_else(|| {
            AppError::internal(
                "Unknown role stored for user",
                json!({ "id": self.id, "role": self.role }),
            )
        })?;

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            phone_prefix,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, phone_number, phone_prefix, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone_number, phone_prefix, role, created_at, updated_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.phone_number)
        .bind(new_user.phone_prefix.as_str())
        .bind(new_user.role.as_str())
        .bind(new_user.created_at)
        .bind(new_user.updated_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_user()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone_number, phone_prefix, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone_number, phone_prefix, role, created_at, updated_at
            FROM users
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn update(&self, user: User) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2, email = $3, phone_number = $4, phone_prefix = $5, role = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, name, email, phone_number, phone_prefix, role, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(user.phone_prefix.as_str())
        .bind(user.role.as_str())
        .bind(user.updated_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_user()
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
