//! Handlers for user management endpoints.
//!
//! Misses are answered with `200 OK` and a plain-text message
//! (`"User not found"`, `"Email not found"`), not with `404`.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::user::{EmailQuery, UserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored email of the user matching `email`.
///
/// # Endpoint
///
/// `GET /users/get-email?email={email}`
///
/// # Response
///
/// The email as plain text, or `Email not found`.
pub async fn get_email_handler(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<String, AppError> {
    let lookup = state.user_service.get_email(&query.email).await?;
    Ok(lookup.into_message())
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "A", "email": "a@x.com" }
/// ```
///
/// # Response
///
/// The stored user including its generated `id`.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok(Json(user.into()))
}

/// Overwrites name and email of a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Response
///
/// `User updated successfully` or `User not found`.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<String, AppError> {
    let outcome = state.user_service.update_user(id, payload.into()).await?;
    Ok(outcome.to_string())
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Response
///
/// `User deleted successfully` or `User not found`.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<String, AppError> {
    let outcome = state.user_service.delete_user(id).await?;
    Ok(outcome.to_string())
}
