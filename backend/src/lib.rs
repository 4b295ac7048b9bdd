//! HTTP server for the authenticated dashboard: guards dashboard routes with
//! the hosted identity service and serves the server-rendered pages.

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use dashboard_frontend::{section_path, DashboardPage, LOGIN_ACTION, LOGOUT_ACTION};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use state::AppState;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/healthz";

/// Paths the router always registers, whatever the configuration says.
pub const FIXED_PUBLIC_PATHS: [&str; 4] = [ROOT_PATH, HEALTH_PATH, LOGIN_ACTION, LOGOUT_ACTION];

pub fn build_router(state: AppState) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route(ROOT_PATH, get(handlers::dashboard::root))
        .route(&state.config.login_path, get(handlers::auth::login_page))
        .route(LOGIN_ACTION, post(handlers::auth::login))
        .route(LOGOUT_ACTION, post(handlers::auth::logout))
        .route(HEALTH_PATH, get(handlers::health::healthz));

    // Dashboard routes (session required, otherwise redirected to login)
    let dashboard_path = &state.config.dashboard_path;
    let dashboard_routes = Router::new()
        .route(
            &section_path(dashboard_path, DashboardPage::Overview.segment()),
            get(handlers::dashboard::overview),
        )
        .route(
            &section_path(dashboard_path, DashboardPage::Activity.segment()),
            get(handlers::dashboard::activity),
        )
        .route(
            &section_path(dashboard_path, DashboardPage::Settings.segment()),
            get(handlers::dashboard::settings),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(dashboard_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(
                    middleware::logging::log_error_responses,
                )),
        )
        .with_state(state)
}
