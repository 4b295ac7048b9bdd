#![allow(dead_code)]
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use dashboard_backend::{
    build_router,
    config::Config,
    models::session::TokenGrant,
    services::auth_client::{AuthError, AuthService},
    state::AppState,
};
use dashboard_frontend::SessionUser;

pub const LIVE_TOKEN: &str = "live-token";

/// In-memory stand-in for the hosted identity service.
#[derive(Default)]
pub struct StubAuthService {
    sessions: HashMap<String, SessionUser>,
    accounts: HashMap<(String, String), TokenGrant>,
    failing: bool,
    lookups: Mutex<Vec<String>>,
    sign_ins: Mutex<Vec<String>>,
    sign_outs: Mutex<Vec<String>>,
}

impl StubAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, token: &str, user: SessionUser) -> Self {
        self.sessions.insert(token.to_string(), user);
        self
    }

    pub fn with_account(mut self, email: &str, password: &str, access_token: &str) -> Self {
        self.accounts.insert(
            (email.to_string(), password.to_string()),
            TokenGrant {
                access_token: access_token.to_string(),
                token_type: "bearer".to_string(),
                expires_in: 900,
            },
        );
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lock lookups").clone()
    }

    pub fn sign_ins(&self) -> Vec<String> {
        self.sign_ins.lock().expect("lock sign-ins").clone()
    }

    pub fn sign_outs(&self) -> Vec<String> {
        self.sign_outs.lock().expect("lock sign-outs").clone()
    }

    fn outage() -> AuthError {
        AuthError::Unexpected {
            status: 503,
            body: "auth service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    async fn current_user(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError> {
        self.lookups
            .lock()
            .expect("lock lookups")
            .push(access_token.to_string());
        if self.failing {
            return Err(Self::outage());
        }
        Ok(self.sessions.get(access_token).cloned())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenGrant, AuthError> {
        self.sign_ins
            .lock()
            .expect("lock sign-ins")
            .push(email.to_string());
        if self.failing {
            return Err(Self::outage());
        }
        self.accounts
            .get(&(email.to_string(), password.to_string()))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.sign_outs
            .lock()
            .expect("lock sign-outs")
            .push(access_token.to_string());
        if self.failing {
            return Err(Self::outage());
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "AUTH_SERVICE_URL" => Some("http://auth.invalid".to_string()),
        "APP_NAME" => Some("Acme Console".to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn test_app(auth: Arc<StubAuthService>) -> Router {
    test_app_with_config(auth, test_config())
}

pub fn test_app_with_config(auth: Arc<StubAuthService>, config: Config) -> Router {
    build_router(AppState::new(config, auth))
}

pub fn ada() -> SessionUser {
    SessionUser {
        id: "user-1".to_string(),
        email: Some("ada@example.com".to_string()),
        full_name: Some("Ada Lovelace".to_string()),
        avatar_url: None,
        role: Some("member".to_string()),
        last_sign_in_at: None,
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
