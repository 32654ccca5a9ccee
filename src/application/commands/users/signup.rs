use super::{AuthSession, UserCommandService, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::DomainError,
        user::{Email, FullName, NewUser, PasswordHash, User, Username},
    },
};
use rand::Rng;

const USERNAME_ATTEMPTS: usize = 5;

pub struct SignupCommand {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupCommand {
    pub fn builder() -> SignupCommandBuilder {
        SignupCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct SignupCommandBuilder {
    full_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl SignupCommandBuilder {
    pub fn full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    pub fn build(self) -> Result<SignupCommand, &'static str> {
        Ok(SignupCommand {
            full_name: self.full_name.ok_or("full_name is required")?,
            email: self.email.ok_or("email is required")?,
            password: self.password.ok_or("password is required")?,
        })
    }
}

impl UserCommandService {
    pub async fn signup(&self, command: SignupCommand) -> ApplicationResult<AuthSession> {
        let full_name = FullName::new(command.full_name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email is already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .insert_with_fresh_username(email, full_name, password_hash)
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user signed up");

        self.open_session(user).await
    }

    /// Draws username suffixes until one is free. The unique index decides
    /// the final outcome, so a lost race on insert counts as another attempt.
    async fn insert_with_fresh_username(
        &self,
        email: Email,
        full_name: FullName,
        password_hash: PasswordHash,
    ) -> ApplicationResult<User> {
        for _ in 0..USERNAME_ATTEMPTS {
            let suffix = rand::rng().random_range(1..=100);
            let username = Username::from_full_name(&full_name, suffix)?;
            if self.user_repo.find_by_username(&username).await?.is_some() {
                continue;
            }

            let new_user = NewUser::new(
                email.clone(),
                username,
                full_name.clone(),
                password_hash.clone(),
                self.clock.now(),
            );
            match self.user_repo.insert(new_user).await {
                Ok(user) => return Ok(user),
                Err(DomainError::DuplicateUsername(_)) => {
                    tracing::warn!("username taken concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not allocate a unique username, try again",
        ))
    }
}
