//! Client for the hosted identity service that owns user sessions.

use std::time::Duration;

use async_trait::async_trait;
use dashboard_frontend::SessionUser;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use url::Url;

use crate::{
    config::Config,
    models::session::{AuthUserPayload, PasswordGrantRequest, TokenGrant},
};

const USER_PATH: &str = "auth/v1/user";
const TOKEN_PATH: &str = "auth/v1/token";
const LOGOUT_PATH: &str = "auth/v1/logout";
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("auth service returned {status}: {body}")]
    Unexpected { status: u16, body: String },
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("failed to decode auth service response: {0}")]
    Decode(String),
    #[error("invalid auth service url: {0}")]
    Url(#[from] url::ParseError),
}

/// Session operations offered by the identity service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolves the user behind `access_token`. `Ok(None)` means the token is
    /// not (or no longer) a live session.
    async fn current_user(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenGrant, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

#[derive(Clone)]
pub struct HostedAuthClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HostedAuthClient {
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AuthError> {
        Self::new(
            config.auth_service_url.clone(),
            config.auth_service_key.clone(),
            config.auth_timeout,
        )
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path)?)
    }

    fn with_api_key(&self, request: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request.header("apikey", &self.api_key)
        }
    }
}

async fn unexpected(response: Response) -> AuthError {
    let status = response.status().as_u16();
    let mut body = response.text().await.unwrap_or_default();
    if body.chars().count() > MAX_ERROR_BODY_CHARS {
        body = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    }
    AuthError::Unexpected { status, body }
}

#[async_trait]
impl AuthService for HostedAuthClient {
    async fn current_user(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError> {
        let url = self.endpoint(USER_PATH)?;
        let response = self
            .with_api_key(self.client.get(url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!(status = status.as_u16(), "Auth service rejected access token");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(unexpected(response).await);
        }

        let payload: AuthUserPayload = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(Some(payload.into()))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenGrant, AuthError> {
        let url = self.endpoint(TOKEN_PATH)?;
        let response = self
            .with_api_key(self.client.post(url))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrantRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(unexpected(response).await);
        }

        response
            .json::<TokenGrant>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let url = self.endpoint(LOGOUT_PATH)?;
        let response = self
            .with_api_key(self.client.post(url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        // A token the service no longer knows is already signed out.
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        Err(unexpected(response).await)
    }
}
