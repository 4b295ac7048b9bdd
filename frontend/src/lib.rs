//! Server-rendered views for the authenticated dashboard: the shared layout
//! chrome, the content pages it wraps, and the login page.

pub mod components;
pub mod pages;
pub mod render;
pub mod types;

#[cfg(test)]
mod test_support;

pub use components::{layout::LOGOUT_ACTION, section_path, NAV_ITEMS};
pub use pages::{login::LOGIN_ACTION, DashboardPage};
pub use render::{render_dashboard, render_login, RenderOptions};
pub use types::SessionUser;
