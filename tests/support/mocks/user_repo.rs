// tests/support/mocks/user_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::user::{
    AvatarUpdate, Email, NewUser, User, UserId, UserRepository, Username,
};
use uuid::Uuid;

/// Enforces the same uniqueness rules as the users table.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.inner.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::DuplicateUsername("username already exists".into()));
        }

        let user = User {
            id: UserId::new(Uuid::new_v4()),
            email: new_user.email,
            username: new_user.username,
            full_name: new_user.full_name,
            password_hash: new_user.password_hash,
            avatar_url: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn update_avatar(&self, update: AvatarUpdate) -> DomainResult<User> {
        let mut users = self.inner.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.set_avatar(update.avatar_url, update.updated_at);
        Ok(user.clone())
    }

    async fn list_except(&self, id: UserId) -> DomainResult<Vec<User>> {
        let users = self.inner.lock().unwrap();
        let mut others: Vec<User> = users.iter().filter(|u| u.id != id).cloned().collect();
        others.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(others)
    }
}
