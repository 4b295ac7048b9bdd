use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    error::AppError,
    services::session::{resolve_session, SessionOutcome},
    state::AppState,
    utils::cookies::{extract_cookie_value, ACCESS_COOKIE_NAME},
};

/// Guards the dashboard: resolves the caller's session and either hands the
/// `SessionUser` to the page handler through request extensions or answers
/// with a redirect to the login page without running the handler.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_access_token(request.headers());
    let outcome = resolve_session(
        state.auth.as_ref(),
        token.as_deref(),
        &state.config.login_path,
    )
    .await?;

    match outcome {
        SessionOutcome::Authenticated(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        SessionOutcome::Redirect(location) => {
            tracing::info!(
                path = %request.uri().path(),
                location = %location,
                "Unauthenticated dashboard request redirected"
            );
            Ok(Redirect::temporary(&location).into_response())
        }
    }
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = rest.trim();
        (!token.is_empty()).then_some(token)
    } else {
        None
    }
}

/// Bearer header first, then the access cookie.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .map(str::to_owned);
    from_header.or_else(|| {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|raw| extract_cookie_value(raw, ACCESS_COOKIE_NAME))
            .filter(|token| !token.is_empty())
    })
}
