use super::{AuthSession, UserCommandService};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AuthSession> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "email and password are required",
            ));
        }

        // A malformed address can never match a stored one.
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::invalid_credentials())?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::invalid_credentials())?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        tracing::info!(user_id = %user.id, "user logged in");
        self.open_session(user).await
    }
}
