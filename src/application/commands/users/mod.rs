mod login;
mod password;
mod profile;
mod service;
mod signup;

pub use login::LoginUserCommand;
pub use profile::UpdateProfileCommand;
pub use service::{AuthSession, UserCommandService};
pub use signup::{SignupCommand, SignupCommandBuilder};
