//! Login Form Component

use leptos::*;

use super::Notification;

/// Username/password form; field values are owned by the caller
#[component]
pub fn LoginForm(
    #[prop(into)]
    message: Signal<Option<String>>,
    #[prop(into)]
    username: Signal<String>,
    #[prop(into)]
    password: Signal<String>,
    on_submit: Callback<()>,
    on_username: Callback<String>,
    on_password: Callback<String>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="max-w-sm mx-auto mt-16 space-y-4">
            <h2 class="text-2xl font-bold">"Log in to application"</h2>

            <Notification message=message />

            <form on:submit=submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"username"</label>
                    <input
                        id="username"
                        type="text"
                        name="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| on_username.call(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"password"</label>
                    <input
                        id="password"
                        type="password"
                        name="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| on_password.call(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    id="login-button"
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "login"
                </button>
            </form>
        </div>
    }
}
