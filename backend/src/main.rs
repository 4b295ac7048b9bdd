use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_backend::{
    build_router, config::Config, services::auth_client::HostedAuthClient, state::AppState,
};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        auth_service_url = %config.auth_service_url,
        auth_service_key = %mask_secret(&config.auth_service_key),
        auth_timeout_secs = config.auth_timeout.as_secs(),
        login_path = %config.login_path,
        dashboard_path = %config.dashboard_path,
        app_name = %config.app_name,
        cookie_secure = config.cookie_secure,
        "Loaded configuration from environment/.env"
    );

    let auth = HostedAuthClient::from_config(&config)?;
    let addr = config.bind_addr;
    let app = build_router(AppState::new(config, Arc::new(auth)));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
