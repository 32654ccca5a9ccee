use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// What gets encoded into a session token.
#[derive(Debug, Clone, Copy)]
pub struct TokenSubject {
    pub user_id: UserId,
}

impl From<&User> for TokenSubject {
    fn from(user: &User) -> Self {
        Self { user_id: user.id }
    }
}

/// Claims recovered from a token whose signature and expiry checked out.
#[derive(Debug, Clone, Copy)]
pub struct VerifiedToken {
    pub user_id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The principal behind a request, resolved from a verified token and a
/// user record that still exists.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}
