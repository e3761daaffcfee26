//! Handlers for the user CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::users::{CreateUserRequest, UserResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/v1/users`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ayla",
///   "email": "ayla@test.com",
///   "phoneNumber": "5012345",
///   "phonePrefix": "_050",
///   "role": "USER"      // optional, defaults to USER
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with per-field messages if validation fails.
/// Returns 409 Conflict if the email is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    tracing::info!("POST request: creating new user");
    payload.validate()?;

    let user = state.user_service.create_user(payload.into_input()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Returns a single user by id.
///
/// # Endpoint
///
/// `GET /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    tracing::info!(id, "GET request: fetching user");

    let user = state.user_service.get_user_by_id(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Returns all users.
///
/// # Endpoint
///
/// `GET /api/v1/users`
///
/// The sequence follows store iteration order; it is not contractually sorted.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    tracing::info!("GET request: fetching all users");

    let users = state.user_service.get_all_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Overwrites a user's fields.
///
/// # Endpoint
///
/// `PUT /api/v1/users/{id}`
///
/// Takes the same body as create; there are no partial updates. `updatedAt`
/// is refreshed, `createdAt` is left untouched.
///
/// # Errors
///
/// Returns 400 Bad Request with per-field messages if validation fails.
/// Returns 404 Not Found if no user matches the id.
/// Returns 409 Conflict if the new email belongs to another user.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    tracing::info!(id, "PUT request: updating user");
    payload.validate()?;

    let user = state
        .user_service
        .update_user(id, payload.into_input())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Hard-deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    tracing::info!(id, "DELETE request: deleting user");

    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
