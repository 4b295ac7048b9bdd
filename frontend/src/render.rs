use crate::{
    components::{layout::DashboardLayout, nav::DEFAULT_DASHBOARD_PATH},
    pages::{dashboard::DashboardPage, login::LoginPage},
    types::SessionUser,
};
use leptos::*;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub app_name: String,
    /// Root the dashboard sections are mounted under.
    pub dashboard_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            app_name: "Dashboard".to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
        }
    }
}

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards.
pub(crate) fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

fn document<F, N>(page_title: String, content: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let html = with_runtime(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{page_title}</title>
                </head>
                <body>{content()}</body>
            </html>
        }
        .into_view()
        .render_to_string()
        .to_string()
    });
    format!("<!DOCTYPE html>{}", html)
}

/// Full HTML document for a dashboard page wrapped in the shared layout.
pub fn render_dashboard(
    user: &SessionUser,
    active_path: &str,
    page: DashboardPage,
    options: &RenderOptions,
) -> String {
    let title = format!("{} · {}", page.title(), options.app_name);
    let user = user.clone();
    let active_path = active_path.to_string();
    let app_name = options.app_name.clone();
    let base_path = options.dashboard_path.clone();
    document(title, move || {
        let content = page.view(&user);
        view! {
            <DashboardLayout
                user=user
                active_path=active_path
                app_name=app_name
                base_path=base_path
            >
                {content}
            </DashboardLayout>
        }
    })
}

/// Full HTML document for the login page. `email` pre-fills the form after a
/// failed attempt.
pub fn render_login(options: &RenderOptions, error: Option<String>, email: Option<&str>) -> String {
    let title = format!("Sign in · {}", options.app_name);
    let app_name = options.app_name.clone();
    let email = email.unwrap_or_default().to_string();
    document(title, move || {
        view! { <LoginPage app_name=app_name error=error email=email/> }
    })
}
