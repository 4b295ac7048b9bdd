use dashboard_frontend::SessionUser;

use crate::services::auth_client::{AuthError, AuthService};

/// What a dashboard request should do once its session has been looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Authenticated(SessionUser),
    Redirect(String),
}

/// Looks up the session behind `access_token`.
///
/// A missing token or a token the service does not recognise sends the
/// visitor to `login_path`. Failures talking to the service are returned as
/// errors and never read as "signed out".
pub async fn resolve_session(
    auth: &dyn AuthService,
    access_token: Option<&str>,
    login_path: &str,
) -> Result<SessionOutcome, AuthError> {
    let Some(token) = access_token.filter(|t| !t.is_empty()) else {
        tracing::debug!(login_path, "No access token on request");
        return Ok(SessionOutcome::Redirect(login_path.to_string()));
    };

    match auth.current_user(token).await? {
        Some(user) => {
            tracing::debug!(user_id = %user.id, "Session resolved");
            Ok(SessionOutcome::Authenticated(user))
        }
        None => {
            tracing::debug!(login_path, "Access token has no live session");
            Ok(SessionOutcome::Redirect(login_path.to_string()))
        }
    }
}
