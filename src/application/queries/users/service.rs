// src/application/queries/users/service.rs
use crate::domain::user::UserRepository;
use std::sync::Arc;

/// Read side for user records: the caller's own profile and the directory
/// of other users.
pub struct UserQueryService {
    pub(super) users: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
