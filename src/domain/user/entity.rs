// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, FullName, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub full_name: FullName,
    pub password_hash: PasswordHash,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn set_avatar(&mut self, avatar_url: impl Into<String>, now: DateTime<Utc>) {
        self.avatar_url = Some(avatar_url.into());
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: Username,
    pub full_name: FullName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        username: Username,
        full_name: FullName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            username,
            full_name,
            password_hash,
            created_at,
        }
    }
}

/// Avatar is the only user field that changes after signup.
#[derive(Debug, Clone)]
pub struct AvatarUpdate {
    pub id: UserId,
    pub avatar_url: String,
    pub updated_at: DateTime<Utc>,
}
