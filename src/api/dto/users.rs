//! DTOs for the user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{PhonePrefix, Role, User, UserInput};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Body of `POST /api/v1/users` and `PUT /api/v1/users/{id}`.
///
/// Create and update share the same full field set. An unknown
/// `phonePrefix` or `role` value fails deserialization before validation
/// runs, so only the known enum codes ever reach the business layer.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Email is required"))]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Phone number is required"))]
    pub phone_number: String,

    pub phone_prefix: PhonePrefix,

    /// Defaults to `USER` when omitted.
    #[serde(default)]
    pub role: Role,
}

impl CreateUserRequest {
    /// Converts the bound request into the field set the service accepts.
    pub fn into_input(self) -> UserInput {
        UserInput {
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            phone_prefix: self.phone_prefix,
            role: self.role,
        }
    }
}

/// JSON representation of a user returned by every endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub phone_prefix: PhonePrefix,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            phone_prefix: user.phone_prefix,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
