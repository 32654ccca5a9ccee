use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{AvatarUpdate, NewUser, User},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn update_avatar(&self, update: AvatarUpdate) -> DomainResult<User>;

    /// Every user except `id`, ordered by username.
    async fn list_except(&self, id: UserId) -> DomainResult<Vec<User>>;
}
