//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::fmt;
use std::sync::Arc;

/// Result of looking a user up by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailLookup {
    Found(String),
    NotFound,
}

impl EmailLookup {
    /// Response text: the stored email, or `"Email not found"`.
    pub fn into_message(self) -> String {
        match self {
            EmailLookup::Found(email) => email,
            EmailLookup::NotFound => "Email not found".to_string(),
        }
    }
}

/// Result of a write addressed by user id.
///
/// A missing id is a regular outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOutcome {
    Updated,
    Deleted,
    NotFound,
}

impl UserOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserOutcome::Updated => "User updated successfully",
            UserOutcome::Deleted => "User deleted successfully",
            UserOutcome::NotFound => "User not found",
        }
    }
}

impl fmt::Display for UserOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service behind the `/users` endpoints.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Looks a user up by exact email match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_email(&self, email: &str) -> Result<EmailLookup, AppError> {
        Ok(match self.repository.find_by_email(email).await? {
            Some(user) => EmailLookup::Found(user.email),
            None => EmailLookup::NotFound,
        })
    }

    /// Persists a new user. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(id = user.id, "User created");
        Ok(user)
    }

    /// Overwrites name and email of an existing user.
    ///
    /// Nothing is written when `id` does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, changes: NewUser) -> Result<UserOutcome, AppError> {
        let Some(mut user) = self.repository.find_by_id(id).await? else {
            tracing::debug!(id, "Update skipped, user not found");
            return Ok(UserOutcome::NotFound);
        };

        user.apply(changes);
        self.repository.update(user).await?;
        tracing::info!(id, "User updated");

        Ok(UserOutcome::Updated)
    }

    /// Removes an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<UserOutcome, AppError> {
        let Some(user) = self.repository.find_by_id(id).await? else {
            tracing::debug!(id, "Delete skipped, user not found");
            return Ok(UserOutcome::NotFound);
        };

        self.repository.delete(&user).await?;
        tracing::info!(id, "User deleted");

        Ok(UserOutcome::Deleted)
    }

    /// Probes the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
