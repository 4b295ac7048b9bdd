use anyhow::anyhow;
use dashboard_frontend::{section_path, DashboardPage};
use std::{env, net::SocketAddr, time::Duration};
use url::Url;

use crate::FIXED_PUBLIC_PATHS;

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_service_url: Url,
    pub auth_service_key: String,
    pub auth_timeout: Duration,
    pub login_path: String,
    pub dashboard_path: String,
    pub app_name: String,
    pub bind_addr: SocketAddr,
    pub cookie_secure: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so the defaults
    /// and validation can be exercised without touching the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let auth_service_url_raw =
            lookup("AUTH_SERVICE_URL").unwrap_or_else(|| "http://localhost:9999".to_string());
        let auth_service_url = Url::parse(&auth_service_url_raw)
            .map_err(|_| anyhow!("Invalid AUTH_SERVICE_URL value: {}", auth_service_url_raw))?;

        let auth_service_key = lookup("AUTH_SERVICE_KEY").unwrap_or_default();

        let auth_timeout_secs = lookup("AUTH_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .unwrap_or(10);

        let login_path = normalize_path("LOGIN_PATH", lookup("LOGIN_PATH"), "/login")?;
        let dashboard_path =
            normalize_path("DASHBOARD_PATH", lookup("DASHBOARD_PATH"), "/dashboard")?;
        let dashboard_path = dashboard_path.trim_end_matches('/').to_string();
        check_route_conflicts(&login_path, &dashboard_path)?;

        let app_name = lookup("APP_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "Dashboard".to_string());

        let bind_addr_raw = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config {
            auth_service_url,
            auth_service_key,
            auth_timeout: Duration::from_secs(auth_timeout_secs),
            login_path,
            dashboard_path,
            app_name,
            bind_addr,
            cookie_secure,
        })
    }
}

fn normalize_path(key: &str, value: Option<String>, default: &str) -> anyhow::Result<String> {
    let path = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());
    if !path.starts_with('/') {
        return Err(anyhow!("{} must start with '/': {}", key, path));
    }
    // The router would read these as captures or wildcards.
    let has_pattern = path.contains(['{', '}'])
        || path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'));
    if has_pattern {
        return Err(anyhow!("{} must be a literal path: {}", key, path));
    }
    Ok(path)
}

/// Rejects configurations whose routes would overlap inside the router.
fn check_route_conflicts(login_path: &str, dashboard_path: &str) -> anyhow::Result<()> {
    if dashboard_path.is_empty() {
        return Err(anyhow!("DASHBOARD_PATH must not be the site root"));
    }
    let dashboard_routes: Vec<String> = DashboardPage::ALL
        .iter()
        .map(|page| section_path(dashboard_path, page.segment()))
        .collect();

    if let Some(route) = dashboard_routes
        .iter()
        .find(|route| FIXED_PUBLIC_PATHS.contains(&route.as_str()))
    {
        return Err(anyhow!(
            "DASHBOARD_PATH {} overlaps the built-in route {}",
            dashboard_path,
            route
        ));
    }
    if FIXED_PUBLIC_PATHS.contains(&login_path)
        || dashboard_routes.iter().any(|route| route == login_path)
    {
        return Err(anyhow!("LOGIN_PATH {} overlaps an existing route", login_path));
    }
    Ok(())
}
