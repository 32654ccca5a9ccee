// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_core::application::{ApplicationResult, error::ApplicationError};

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-test-secret-test-secret!";

/// Argon2 is far too slow for request-level tests; this keeps the contract
/// (mismatch means unauthorized) without the cost.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl blog_core::application::ports::security::PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::invalid_credentials())
        }
    }
}
