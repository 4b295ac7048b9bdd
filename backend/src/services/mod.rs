pub mod auth_client;
pub mod session;

pub use auth_client::{AuthError, AuthService, HostedAuthClient};
pub use session::{resolve_session, SessionOutcome};
