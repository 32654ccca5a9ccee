use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::ApplicationResult,
};

impl UserQueryService {
    /// Everyone except the caller, for the sidebar.
    pub async fn list_other_users(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<UserDto>> {
        let users = self.users.list_except(actor.id).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
