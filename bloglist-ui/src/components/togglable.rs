//! Togglable Component
//!
//! Collapsible panel whose open flag belongs to the parent.

use leptos::*;

/// Shows a button labelled `label` while closed, the children and a cancel
/// button while open. Both buttons ask the parent to flip `open`.
#[component]
pub fn Togglable(
    #[prop(into)]
    label: String,
    #[prop(into)]
    open: Signal<bool>,
    on_toggle: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="my-4">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button
                        on:click=move |_| on_toggle.call(())
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        {label.clone()}
                    </button>
                }
            >
                <div class="togglable-content space-y-2">
                    {children()}
                    <button
                        on:click=move |_| on_toggle.call(())
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg text-sm transition-colors"
                    >
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}
