use crate::types::SessionUser;
use leptos::*;

/// Content pages that can fill the layout's content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPage {
    Overview,
    Activity,
    Settings,
}

impl DashboardPage {
    pub const ALL: [DashboardPage; 3] = [
        DashboardPage::Overview,
        DashboardPage::Activity,
        DashboardPage::Settings,
    ];

    /// Path segment under the dashboard root; empty for the root itself.
    pub fn segment(&self) -> &'static str {
        match self {
            DashboardPage::Overview => "",
            DashboardPage::Activity => "activity",
            DashboardPage::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardPage::Overview => "Overview",
            DashboardPage::Activity => "Activity",
            DashboardPage::Settings => "Settings",
        }
    }

    pub fn view(self, user: &SessionUser) -> View {
        match self {
            DashboardPage::Overview => view! { <OverviewPage user=user.clone()/> }.into_view(),
            DashboardPage::Activity => view! { <ActivityPage user=user.clone()/> }.into_view(),
            DashboardPage::Settings => view! { <SettingsPage user=user.clone()/> }.into_view(),
        }
    }
}

#[component]
fn PageHeading(title: &'static str, #[prop(optional, into)] subtitle: String) -> impl IntoView {
    let subtitle = (!subtitle.is_empty())
        .then(move || view! { <p class="mt-1 text-sm text-fg-muted">{subtitle}</p> });
    view! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            {subtitle}
        </div>
    }
}

#[component]
pub fn OverviewPage(user: SessionUser) -> impl IntoView {
    let greeting = format!("Welcome back, {}", user.display_name());
    view! {
        <section>
            <PageHeading title="Overview" subtitle=greeting/>
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <p class="text-sm text-fg">"You are signed in. Use the navigation to move between sections."</p>
            </div>
        </section>
    }
}

#[component]
pub fn ActivityPage(user: SessionUser) -> impl IntoView {
    let last_sign_in = format_last_sign_in(&user);
    view! {
        <section>
            <PageHeading title="Activity"/>
            <dl class="bg-surface-elevated shadow rounded-lg p-6 grid grid-cols-2 gap-4 text-sm">
                <dt class="text-fg-muted">"Last sign-in"</dt>
                <dd class="text-fg">{last_sign_in}</dd>
            </dl>
        </section>
    }
}

#[component]
pub fn SettingsPage(user: SessionUser) -> impl IntoView {
    let rows = vec![
        ("User ID", user.id.clone()),
        ("Email", user.email.clone().unwrap_or_else(|| "-".into())),
        ("Name", user.full_name.clone().unwrap_or_else(|| "-".into())),
        ("Role", user.role.clone().unwrap_or_else(|| "-".into())),
    ];
    view! {
        <section>
            <PageHeading title="Settings" subtitle="Profile details come from your identity provider."/>
            <dl class="bg-surface-elevated shadow rounded-lg p-6 grid grid-cols-2 gap-4 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt class="text-fg-muted">{label}</dt>
                            <dd class="text-fg">{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

fn format_last_sign_in(user: &SessionUser) -> String {
    user.last_sign_in_at
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "Never".to_string())
}
