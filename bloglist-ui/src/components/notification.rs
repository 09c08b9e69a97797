//! Notification Component
//!
//! Shows the current message, success or error alike.

use leptos::*;

/// Current message, or nothing
#[component]
pub fn Notification(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <div class="notification fixed top-4 right-4 z-50 bg-gray-800 text-white px-4 py-3
                        rounded-lg shadow-lg transform transition-all duration-300 ease-out animate-slide-in">
                <span class="text-sm font-medium">{text}</span>
            </div>
        })
    }
}
