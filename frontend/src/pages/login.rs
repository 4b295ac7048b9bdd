use crate::components::layout::ErrorMessage;
use leptos::*;

pub const LOGIN_ACTION: &str = "/auth/login";

#[component]
pub fn LoginPage(
    #[prop(into, default = "Dashboard".to_string())] app_name: String,
    #[prop(default = None)] error: Option<String>,
    #[prop(optional, into)] email: String,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="w-full max-w-md space-y-6">
                <h1 class="text-center text-2xl font-bold text-fg">{format!("Sign in to {}", app_name)}</h1>
                {error.map(|message| view! { <ErrorMessage message=message/> })}
                <form method="post" action=LOGIN_ACTION class="space-y-4">
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required=true
                            value=email
                            class="mt-1 block w-full rounded-md border border-border px-3 py-2 text-sm"
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            class="mt-1 block w-full rounded-md border border-border px-3 py-2 text-sm"
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                    >
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
