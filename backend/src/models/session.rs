//! Wire payloads exchanged with the hosted identity service.

use chrono::{DateTime, Utc};
use dashboard_frontend::SessionUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
/// User record returned by `GET /auth/v1/user`.
pub struct AuthUserPayload {
    /// Stable identifier assigned by the identity service.
    pub id: String,
    /// Primary email address, absent for phone-only accounts.
    #[serde(default)]
    pub email: Option<String>,
    /// Audience role the service attaches to every token.
    #[serde(default)]
    pub role: Option<String>,
    /// Timestamp of the most recent successful sign-in.
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
    /// Profile data the user controls.
    #[serde(default)]
    pub user_metadata: UserMetadata,
    /// Data only the service or its admins can set.
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

impl From<AuthUserPayload> for SessionUser {
    fn from(payload: AuthUserPayload) -> Self {
        let AuthUserPayload {
            id,
            email,
            role,
            last_sign_in_at,
            user_metadata,
            app_metadata,
        } = payload;
        SessionUser {
            id,
            email,
            full_name: user_metadata.full_name.or(user_metadata.name),
            avatar_url: user_metadata.avatar_url,
            // Application roles win over the generic token audience role.
            role: app_metadata.role.or(role),
            last_sign_in_at,
        }
    }
}

#[derive(Debug, Serialize)]
/// Body of the password grant request.
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Tokens issued by a successful sign-in.
pub struct TokenGrant {
    /// Bearer token presented on later requests.
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of `access_token` in seconds.
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}
