#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use user_service::application::services::UserService;
use user_service::domain::entities::{NewUser, User};
use user_service::domain::repositories::UserRepository;
use user_service::error::AppError;
use user_service::state::AppState;

/// `UserRepository` kept in process memory, so handler tests run without PostgreSQL.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<BTreeMap<i64, User>>,
    next_id: Mutex<i64>,
    unreachable: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail like a lost database connection.
    pub fn set_unreachable(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.check()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let user = User::new(id, new_user.name, new_user.email);
        self.rows.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&user.id) {
            Some(row) => {
                *row = user.clone();
                Ok(user)
            }
            None => Err(AppError::not_found("User not found", json!({"id": user.id}))),
        }
    }

    async fn delete(&self, user: &User) -> Result<(), AppError> {
        self.check()?;
        self.rows.lock().unwrap().remove(&user.id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repo.clone()));

    (AppState::new(user_service), repo)
}

pub async fn seed_user(repo: &InMemoryUserRepository, name: &str, email: &str) -> User {
    repo.create(NewUser::new(name, email)).await.unwrap()
}
