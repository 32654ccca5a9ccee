use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate's default parameters. Both operations are CPU
/// bound and run on the blocking pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    fn hash_blocking(password: &[u8]) -> ApplicationResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password, &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| ApplicationError::infrastructure(format!("password hashing: {err}")))
    }

    fn verify_blocking(password: &[u8], expected_hash: &str) -> ApplicationResult<()> {
        let parsed = PasswordHash::new(expected_hash)
            .map_err(|err| ApplicationError::infrastructure(format!("stored hash: {err}")))?;
        Argon2::default()
            .verify_password(password, &parsed)
            .map_err(|_| ApplicationError::invalid_credentials())
    }
}

fn join_error(err: tokio::task::JoinError) -> ApplicationError {
    ApplicationError::infrastructure(format!("password task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || Self::hash_blocking(password.as_bytes()))
            .await
            .map_err(join_error)?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            Self::verify_blocking(password.as_bytes(), &expected_hash)
        })
        .await
        .map_err(join_error)?
    }
}
