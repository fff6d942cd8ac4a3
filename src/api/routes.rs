//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_email_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// User management routes. No authentication.
///
/// # Endpoints
///
/// - `GET    /users/get-email?email=` - Look up a user's email
/// - `POST   /users`                  - Create a user
/// - `PUT    /users/{id}`             - Overwrite name and email
/// - `DELETE /users/{id}`             - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/get-email", get(get_email_handler))
        .route(
            "/users/{id}",
            put(update_user_handler).delete(delete_user_handler),
        )
}
