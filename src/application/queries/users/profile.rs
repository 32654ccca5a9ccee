use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    pub async fn current_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .users
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("user no longer exists"))?;
        Ok(user.into())
    }
}
