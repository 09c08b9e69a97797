//! Blog Component
//!
//! One blog in the list: title and author, with details on demand.

use leptos::*;

use bloglist::BlogItem;

/// A blog entry with like and (for its owner) remove affordances
#[component]
pub fn Blog(
    #[prop(into)]
    item: Signal<BlogItem>,
    on_like: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let like = move |_| on_like.call(item.get_untracked().blog.id);
    let delete = move |_| on_delete.call(item.get_untracked().blog.id);

    view! {
        <div class="blog bg-gray-800 rounded-lg p-4 my-2">
            <div class="flex items-center justify-between">
                <span class="font-medium">
                    {move || {
                        let blog = item.get().blog;
                        format!("{} {}", blog.title, blog.author)
                    }}
                </span>
                <button
                    on:click=move |_| set_expanded.update(|open| *open = !*open)
                    class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                >
                    {move || if expanded.get() { "hide" } else { "view" }}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="blog-details mt-2 space-y-1 text-sm text-gray-300">
                    <div>{move || item.get().blog.url}</div>
                    <div>
                        "likes " {move || item.get().blog.likes}
                        <button
                            on:click=like
                            class="ml-2 px-2 py-0.5 bg-gray-700 hover:bg-gray-600 rounded transition-colors"
                        >
                            "like"
                        </button>
                    </div>
                    <div>
                        {move || {
                            item.get()
                                .blog
                                .user
                                .and_then(|owner| owner.name().map(str::to_string))
                                .unwrap_or_default()
                        }}
                    </div>
                    <Show when=move || item.get().removable>
                        <button
                            on:click=delete
                            class="px-2 py-0.5 bg-red-600 hover:bg-red-700 rounded transition-colors"
                        >
                            "remove"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
