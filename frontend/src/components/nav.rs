use leptos::*;

pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// A dashboard section. `segment` is relative to the dashboard root; the
/// empty segment is the root itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub segment: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        segment: "",
        label: "Overview",
    },
    NavItem {
        segment: "activity",
        label: "Activity",
    },
    NavItem {
        segment: "settings",
        label: "Settings",
    },
];

/// Absolute path of `segment` under the dashboard root at `base_path`.
pub fn section_path(base_path: &str, segment: &str) -> String {
    let base = base_path.trim_end_matches('/');
    if segment.is_empty() {
        if base.is_empty() {
            "/".to_string()
        } else {
            base.to_string()
        }
    } else {
        format!("{}/{}", base, segment)
    }
}

impl NavItem {
    pub fn href(&self, base_path: &str) -> String {
        section_path(base_path, self.segment)
    }
}

// The root entry only matches itself; every other entry also owns its subpaths.
pub fn is_active(item: &NavItem, base_path: &str, active_path: &str) -> bool {
    let href = item.href(base_path);
    if item.segment.is_empty() {
        return active_path == href;
    }
    active_path == href
        || active_path
            .strip_prefix(href.as_str())
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar(
    #[prop(into)] active_path: String,
    #[prop(into, default = DEFAULT_DASHBOARD_PATH.to_string())] base_path: String,
) -> impl IntoView {
    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let active = is_active(item, &base_path, &active_path);
            let class = if active {
                "block rounded-md px-3 py-2 text-sm font-semibold bg-action-ghost-bg-hover text-fg"
            } else {
                "block rounded-md px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
            };
            view! {
                <li>
                    <a href=item.href(&base_path) class=class aria-current=active.then_some("page")>
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="w-60 shrink-0 border-r border-border bg-surface-elevated">
            <nav aria-label="Dashboard" class="px-3 py-4">
                <ul class="space-y-1">{links}</ul>
            </nav>
        </aside>
    }
}
