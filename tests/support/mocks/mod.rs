// tests/support/mocks/mod.rs
//! In-memory stand-ins for the ports and repositories.

pub mod images;
pub mod post_repos;
pub mod security;
pub mod time;
pub mod user_repo;

pub use images::FakeImageStore;
pub use post_repos::{InMemoryPostRead, InMemoryPostWrite, PostStore, SlugBlindPostRead};
pub use security::{PlainPasswordHasher, TEST_JWT_SECRET};
pub use time::{SteppingClock, base_time};
pub use user_repo::InMemoryUserRepo;
