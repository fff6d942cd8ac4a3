//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` table.
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
    /// Finds a user by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact email match.
    ///
    /// Emails are not unique. When several rows match, the one with the
    /// lowest id is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Overwrites name and email of the row with `user.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, user: User) -> Result<User, AppError>;

    /// Removes the user's row. Removing a row that is already gone is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user: &User) -> Result<(), AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
