pub mod layout;
pub mod nav;

pub use layout::{DashboardLayout, ErrorMessage, Header, UserAvatar};
pub use nav::{section_path, Sidebar, DEFAULT_DASHBOARD_PATH, NAV_ITEMS};
