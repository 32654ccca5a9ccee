use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::AvatarUpdate,
};

pub struct UpdateProfileCommand {
    pub profile_pic: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let source = command
            .profile_pic
            .filter(|pic| !pic.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("profile_pic is required"))?;

        let avatar_url = self.image_store.upload(&source).await?;
        let user = self
            .user_repo
            .update_avatar(AvatarUpdate {
                id: actor.id,
                avatar_url,
                updated_at: self.clock.now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "profile picture updated");
        Ok(user.into())
    }
}
