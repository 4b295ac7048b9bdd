use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use dashboard_frontend::render_login;
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::session::extract_access_token,
    services::auth_client::AuthError,
    state::AppState,
    utils::cookies::{build_clear_session_cookie, build_session_cookie, CookieOptions},
};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
const MISSING_FIELDS_MESSAGE: &str = "Enter your email and password.";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_page(State(state): State<AppState>) -> Html<String> {
    Html(render_login(&state.render_options(), None, None))
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Ok(login_failure(
            &state,
            StatusCode::BAD_REQUEST,
            MISSING_FIELDS_MESSAGE,
            email,
        ));
    }

    let grant = match state.auth.sign_in_with_password(email, &form.password).await {
        Ok(grant) => grant,
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("Password sign-in rejected");
            return Ok(login_failure(
                &state,
                StatusCode::UNAUTHORIZED,
                INVALID_CREDENTIALS_MESSAGE,
                email,
            ));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Password sign-in succeeded");
    let cookie = build_session_cookie(
        &grant.access_token,
        Duration::from_secs(grant.expires_in),
        CookieOptions::from_config(&state.config),
    );
    Ok((
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&state.config.dashboard_path),
    )
        .into_response())
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = extract_access_token(&headers) {
        if let Err(err) = state.auth.sign_out(&token).await {
            tracing::warn!(error = %err, "Failed to revoke session at auth service");
        }
    }
    let cookie = build_clear_session_cookie(CookieOptions::from_config(&state.config));
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&state.config.login_path),
    )
        .into_response()
}

fn login_failure(state: &AppState, status: StatusCode, message: &str, email: &str) -> Response {
    let html = render_login(
        &state.render_options(),
        Some(message.to_string()),
        Some(email),
    );
    (status, Html(html)).into_response()
}
