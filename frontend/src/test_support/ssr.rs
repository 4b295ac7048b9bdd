use leptos::*;

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    crate::render::with_runtime(|| view().into_view().render_to_string().to_string())
}
