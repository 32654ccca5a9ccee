// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{posts::PostCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            ClockPort, ImageStorePort, PasswordHasherPort, SlugGeneratorPort, TokenManagerPort,
        },
        queries::{posts::PostQueryService, users::UserQueryService},
    },
    domain::{
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
        user::UserRepository,
    },
};

/// Everything the HTTP layer needs, wired once at startup.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    user_repo: Arc<dyn UserRepository>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        image_store: Arc<ImageStorePort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&image_store),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            slug_service,
            Arc::clone(&image_store),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            user_repo,
            token_manager,
        }
    }

    /// Resolves a raw session token to the user behind it. A valid token
    /// whose user has since disappeared is treated like an invalid one.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let verified = self.token_manager.verify(token).await?;
        let user = self
            .user_repo
            .find_by_id(verified.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("user no longer exists"))?;

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.into(),
            expires_at: verified.expires_at,
        })
    }
}
