//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user rows.
///
/// Provides CRUD operations with standard primary-key semantics and
/// auto-incrementing identity. Uniqueness of `email` is enforced by the
/// storage layer; callers are expected to run [`Self::exists_by_email`]
/// first so duplicates surface as a business-rule conflict.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user row and returns it with the generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email collides with an existing
    /// row on the unique index.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Returns all user rows in store iteration order.
    ///
    /// The order is whatever the store yields; it is not contractually sorted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Returns whether a row with exactly this email exists.
    ///
    /// The comparison is case-sensitive, matching the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Returns whether a row with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Overwrites the row identified by `user.id` and returns the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email collides on the unique
    /// index. Returns [`AppError::Internal`] on other database errors,
    /// including when no row matches the id.
    async fn update(&self, user: User) -> Result<User, AppError>;

    /// Deletes the row with this id. Deleting an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
