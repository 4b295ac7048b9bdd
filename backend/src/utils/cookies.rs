use std::time::Duration;

use crate::config::Config;

#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub secure: bool,
}

impl CookieOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            secure: config.cookie_secure,
        }
    }
}

pub const ACCESS_COOKIE_NAME: &str = "access_token";
pub const ACCESS_COOKIE_PATH: &str = "/";

/// `Set-Cookie` value holding the session's access token.
pub fn build_session_cookie(value: &str, max_age: Duration, options: CookieOptions) -> String {
    build_cookie(ACCESS_COOKIE_NAME, value, max_age.as_secs(), options)
}

/// `Set-Cookie` value that makes the browser drop the access token.
pub fn build_clear_session_cookie(options: CookieOptions) -> String {
    build_cookie(ACCESS_COOKIE_NAME, "", 0, options)
}

fn build_cookie(name: &str, value: &str, max_age_secs: u64, options: CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite=Lax",
        name, value, ACCESS_COOKIE_PATH, max_age_secs
    );
    if options.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"').to_string())
    })
}
