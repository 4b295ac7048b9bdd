use std::sync::Arc;

use dashboard_frontend::RenderOptions;

use crate::{config::Config, services::auth_client::AuthService};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth: Arc<dyn AuthService>,
}

impl AppState {
    pub fn new(config: Config, auth: Arc<dyn AuthService>) -> Self {
        Self { config, auth }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            app_name: self.config.app_name.clone(),
            dashboard_path: self.config.dashboard_path.clone(),
        }
    }
}
