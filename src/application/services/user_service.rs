//! User CRUD service.

use std::sync::Arc;
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde_json::json;

use crate::domain::entities::{NewUser, User, UserInput};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Email pattern enforced on create: non-empty local part, at least one
/// dot-separated domain label, top-level label of 2-4 word characters.
/// Stricter than the transport-level `email` check.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-.]+@([\w\-]+\.)+[\w\-]{2,4}$").unwrap());

/// Service implementing the user CRUD operations.
///
/// Owns input validation, the duplicate-email rule, and timestamp stamping.
/// Each operation is a single-shot request/response against the repository;
/// there is no in-process shared mutable state.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user from the submitted field set.
    ///
    /// Email presence and format are re-validated here even though the
    /// transport layer already checks them; the duplicate check runs against
    /// the stored email values with a case-sensitive exact match. Both
    /// timestamps are stamped to the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is blank or malformed.
    /// Returns [`AppError::Conflict`] if the email is already taken.
    pub async fn create_user(&self, input: UserInput) -> Result<User, AppError> {
        if input.email.trim().is_empty() {
            return Err(AppError::bad_request(
                "Email cannot be null or empty",
                json!({ "field": "email" }),
            ));
        }
        if !EMAIL_REGEX.is_match(&input.email) {
            return Err(AppError::bad_request(
                format!("Invalid email format: {}", input.email),
                json!({ "email": input.email }),
            ));
        }

        tracing::info!(email = %input.email, "Creating new user");

        if self.repository.exists_by_email(&input.email).await? {
            tracing::warn!(email = %input.email, "Attempt to create user with duplicate email");
            return Err(AppError::conflict(
                format!("User with email {} already exists", input.email),
                json!({ "email": input.email }),
            ));
        }

        let now = Utc::now();
        let user = self
            .repository
            .insert(NewUser {
                name: input.name,
                email: input.email,
                phone_number: input.phone_number,
                phone_prefix: input.phone_prefix,
                role: input.role,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(id = user.id, "User created successfully");
        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches the id.
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, AppError> {
        tracing::debug!(id, "Fetching user");

        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(id, "User not found");
            AppError::not_found(format!("User not found with ID: {id}"), json!({ "id": id }))
        })
    }

    /// Returns all users in store iteration order.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        tracing::info!("Fetching all users");

        self.repository.find_all().await
    }

    /// Overwrites a user's fields and refreshes `updated_at`.
    ///
    /// The duplicate-email check only runs when the submitted email differs
    /// from the stored one, so updating a user to its own current email
    /// always succeeds. Email format is NOT re-validated here; the create
    /// operation is stricter than update and the asymmetry is intentional
    /// (pinned by tests, see `update_user_skips_email_format_check`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches the id.
    /// Returns [`AppError::Conflict`] if the new email belongs to another row.
    pub async fn update_user(&self, id: i64, input: UserInput) -> Result<User, AppError> {
        tracing::info!(id, "Updating user");

        let mut user = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(id, "User not found");
            AppError::not_found(format!("User not found with ID: {id}"), json!({ "id": id }))
        })?;

        if user.email != input.email && self.repository.exists_by_email(&input.email).await? {
            tracing::warn!(email = %input.email, "Attempt to update user with duplicate email");
            return Err(AppError::conflict(
                format!("User with email {} already exists", input.email),
                json!({ "email": input.email }),
            ));
        }

        user.name = input.name;
        user.email = input.email;
        user.phone_number = input.phone_number;
        user.phone_prefix = input.phone_prefix;
        user.role = input.role;
        user.updated_at = Utc::now();

        let updated = self.repository.update(user).await?;

        tracing::info!(id = updated.id, "User updated successfully");
        Ok(updated)
    }

    /// Hard-deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches the id.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        tracing::info!(id, "Deleting user");

        if !self.repository.exists_by_id(id).await? {
            tracing::warn!(id, "User not found");
            return Err(AppError::not_found(
                format!("User not found with ID: {id}"),
                json!({ "id": id }),
            ));
        }

        self.repository.delete_by_id(id).await?;

        tracing::info!(id, "User deleted successfully");
        Ok(())
    }
}
