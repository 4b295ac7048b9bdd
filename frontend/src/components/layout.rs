use crate::{
    components::nav::{Sidebar, DEFAULT_DASHBOARD_PATH},
    types::SessionUser,
};
use leptos::*;

pub const LOGOUT_ACTION: &str = "/auth/logout";

#[component]
pub fn Header(user: SessionUser, #[prop(into)] app_name: String) -> impl IntoView {
    let display_name = user.display_name();
    let email = user.email.clone().unwrap_or_default();
    let role = user.role.clone().filter(|r| !r.trim().is_empty());
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">{app_name}</h1>
                    <div class="flex items-center gap-3">
                        <UserAvatar user=user/>
                        <div class="hidden sm:block text-right">
                            <p class="text-sm font-medium text-fg">{display_name}</p>
                            <p class="text-xs text-fg-muted">{email}</p>
                            {role.map(|role| view! { <p class="text-xs text-fg-muted">{role}</p> })}
                        </div>
                        <form method="post" action=LOGOUT_ACTION>
                            <button
                                type="submit"
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign out"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn UserAvatar(user: SessionUser) -> impl IntoView {
    let alt = user.display_name();
    match user.avatar_url.clone().filter(|url| !url.trim().is_empty()) {
        Some(url) => view! {
            <img class="h-8 w-8 rounded-full object-cover" src=url alt=alt/>
        }
        .into_view(),
        None => view! {
            <span
                class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-sm font-semibold"
                title=alt
            >
                {user.initials()}
            </span>
        }
        .into_view(),
    }
}

/// Shared chrome for every authenticated dashboard page: navigation, a header
/// that knows who is signed in, and the page's own content.
#[component]
pub fn DashboardLayout(
    user: SessionUser,
    #[prop(into)] active_path: String,
    #[prop(into, default = "Dashboard".to_string())] app_name: String,
    #[prop(into, default = DEFAULT_DASHBOARD_PATH.to_string())] base_path: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-surface">
            <Sidebar active_path=active_path base_path=base_path/>
            <div class="flex-1 flex flex-col min-w-0">
                <Header user=user app_name=app_name/>
                <main id="content" class="flex-1 max-w-7xl w-full mx-auto py-6 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            role="alert"
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}
