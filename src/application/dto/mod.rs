pub mod auth;
pub mod pagination;
pub mod posts;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject, VerifiedToken};
pub use pagination::{Page, PageRequest};
pub use posts::PostDto;
pub use users::UserDto;
