use std::sync::Arc;

use crate::application::{
    dto::{AuthTokenDto, TokenSubject, UserDto},
    error::ApplicationResult,
    ports::{
        images::ImageStore,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

/// A freshly issued session together with the user it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserDto,
    pub token: AuthTokenDto,
}

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            image_store,
            clock,
        }
    }

    pub(super) async fn open_session(&self, user: User) -> ApplicationResult<AuthSession> {
        let token = self.token_manager.issue(TokenSubject::from(&user)).await?;
        Ok(AuthSession {
            user: user.into(),
            token,
        })
    }
}
