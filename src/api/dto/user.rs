//! DTOs for the `/users` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// An `id` sent by the client is ignored; ids are assigned by the store and
/// taken from the path on update.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
        }
    }
}

/// JSON representation of a stored user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Query string of `GET /users/get-email`.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
