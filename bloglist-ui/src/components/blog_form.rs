//! Blog Form Component
//!
//! Form for drafting a new blog.

use leptos::*;

use bloglist::BlogDraft;

/// Blog creation form; clears itself after each submission
#[component]
pub fn BlogForm(on_submit: Callback<BlogDraft>) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (author, set_author) = create_signal(String::new());
    let (url, set_url) = create_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        on_submit.call(BlogDraft {
            title: title.get_untracked(),
            author: author.get_untracked(),
            url: url.get_untracked(),
        });

        set_title.set(String::new());
        set_author.set(String::new());
        set_url.set(String::new());
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Create New"</h2>

            <form on:submit=submit class="space-y-4">
                <DraftField label="title" value=title set_value=set_title />
                <DraftField label="author" value=author set_value=set_author />
                <DraftField label="url" value=url set_value=set_url />

                <button
                    id="create-button"
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "create"
                </button>
            </form>
        </div>
    }
}

#[component]
fn DraftField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}": "</label>
            <input
                type="text"
                id=label
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
