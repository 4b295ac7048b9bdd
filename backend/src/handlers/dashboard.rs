use axum::{
    extract::State,
    http::Uri,
    response::{Html, Redirect},
    Extension,
};
use dashboard_frontend::{render_dashboard, DashboardPage, SessionUser};

use crate::state::AppState;

// Each handler runs behind `require_session`, which supplies the user.

pub async fn overview(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    uri: Uri,
) -> Html<String> {
    render_page(&state, &user, &uri, DashboardPage::Overview)
}

pub async fn activity(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    uri: Uri,
) -> Html<String> {
    render_page(&state, &user, &uri, DashboardPage::Activity)
}

pub async fn settings(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    uri: Uri,
) -> Html<String> {
    render_page(&state, &user, &uri, DashboardPage::Settings)
}

fn render_page(state: &AppState, user: &SessionUser, uri: &Uri, page: DashboardPage) -> Html<String> {
    Html(render_dashboard(
        user,
        uri.path(),
        page,
        &state.render_options(),
    ))
}

pub async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.config.dashboard_path)
}
