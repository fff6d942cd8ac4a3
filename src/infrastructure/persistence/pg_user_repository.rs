//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Row shape of the `users` table.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.name, r.email)
    }
}

/// PostgreSQL repository for users.
///
/// Every method is a single statement; no transactions or row locks.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        // email is not unique; lowest id wins so repeated lookups agree.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, user: User) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                name  = $2,
                email = $3
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(User::from)
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": user.id})))
    }

    async fn delete(&self, user: &User) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id = user.id, "Delete matched no rows");
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
