//! App Root Component
//!
//! Wires the shared controller to the browser: service clients, session
//! store, re-rendering on every state change, and message expiry timers.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use leptos::*;

use bloglist::{BlogApp, BlogDraft, BlogItem, MessageTicket, View};

use crate::api::{get_api_base, BrowserApi};
use crate::components::{Blog, BlogForm, LoginForm, Notification, Togglable};
use crate::state::LocalSessionStore;

type Controller = BlogApp<BrowserApi, BrowserApi, LocalSessionStore>;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let api = BrowserApi::new(get_api_base());
    let app = Rc::new(BlogApp::new(api.clone(), api, LocalSessionStore));

    let current = create_rw_signal(app.view());
    watch(&app, current);

    let boot = app.clone();
    spawn_local(async move {
        if let Err(e) = boot.bootstrap().await {
            web_sys::console::error_1(&format!("Failed to load blogs: {}", e).into());
        }
    });

    // Derived pieces, so typing or liking re-renders only what changed
    let logged_in = create_memo(move |_| matches!(current.get(), View::Blogs(_)));
    let message = create_memo(move |_| match current.get() {
        View::Login(login) => login.message,
        View::Blogs(blogs) => blogs.message,
    });
    let login_fields = create_memo(move |_| match current.get() {
        View::Login(login) => (login.username, login.password),
        View::Blogs(_) => (String::new(), String::new()),
    });
    let username = Signal::derive(move || login_fields.get().0);
    let password = Signal::derive(move || login_fields.get().1);
    let logged_in_label = create_memo(move |_| match current.get() {
        View::Blogs(blogs) => blogs.logged_in_label(),
        View::Login(_) => String::new(),
    });
    let form_open = create_memo(move |_| match current.get() {
        View::Blogs(blogs) => blogs.blog_form_open,
        View::Login(_) => false,
    });
    let items = create_memo(move |_| match current.get() {
        View::Blogs(blogs) => blogs.blogs,
        View::Login(_) => Vec::new(),
    });

    let on_username = {
        let app = app.clone();
        Callback::new(move |value: String| app.set_username(value))
    };
    let on_password = {
        let app = app.clone();
        Callback::new(move |value: String| app.set_password(value))
    };
    let on_login = {
        let app = app.clone();
        Callback::new(move |_: ()| {
            let app = app.clone();
            spawn_local(async move {
                if let Err(e) = app.login().await {
                    web_sys::console::warn_1(&format!("Login failed: {}", e).into());
                }
            });
        })
    };
    let on_logout = {
        let app = app.clone();
        Callback::new(move |_: ()| app.logout())
    };
    let on_toggle = {
        let app = app.clone();
        Callback::new(move |_: ()| app.toggle_blog_form())
    };
    let on_create = {
        let app = app.clone();
        Callback::new(move |draft: BlogDraft| {
            let app = app.clone();
            spawn_local(async move {
                if let Err(e) = app.add_blog(draft).await {
                    web_sys::console::error_1(&format!("Failed to create blog: {}", e).into());
                }
            });
        })
    };
    let on_like = {
        let app = app.clone();
        Callback::new(move |id: String| {
            let app = app.clone();
            spawn_local(async move {
                if let Err(e) = app.add_like(&id).await {
                    let text = format!("Failed to like blog {}: {}", id, e);
                    web_sys::console::error_1(&text.into());
                }
            });
        })
    };
    let on_delete = {
        let app = app.clone();
        Callback::new(move |id: String| {
            let app = app.clone();
            spawn_local(async move {
                if let Err(e) = app.remove_blog(&id, confirm).await {
                    let text = format!("Failed to remove blog {}: {}", id, e);
                    web_sys::console::error_1(&text.into());
                }
            });
        })
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="container mx-auto px-4 py-8">
                <Show
                    when=move || logged_in.get()
                    fallback=move || view! {
                        <LoginForm
                            message=message
                            username=username
                            password=password
                            on_submit=on_login
                            on_username=on_username
                            on_password=on_password
                        />
                    }
                >
                    <h2 class="text-3xl font-bold mb-4">"Blogs"</h2>

                    <Notification message=message />

                    <p class="flex items-center space-x-3 text-gray-300">
                        <span>{move || logged_in_label.get()}</span>
                        <button
                            on:click=move |_| on_logout.call(())
                            class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                        >
                            "Logout"
                        </button>
                    </p>

                    <Togglable label="New Blog" open=form_open on_toggle=on_toggle>
                        <BlogForm on_submit=on_create />
                    </Togglable>

                    <For
                        each=move || items.get()
                        key=|item| item.blog.id.clone()
                        children=move |item: BlogItem| {
                            let id = item.blog.id.clone();
                            let entry = Signal::derive(move || {
                                items
                                    .get()
                                    .into_iter()
                                    .find(|i| i.blog.id == id)
                                    .unwrap_or_else(|| item.clone())
                            });
                            view! { <Blog item=entry on_like=on_like on_delete=on_delete /> }
                        }
                    />
                </Show>
            </main>
        </div>
    }
}

/// Mirror every committed state into `current`, and start one expiry timer
/// per newly shown message
fn watch(app: &Rc<Controller>, current: RwSignal<View>) {
    let weak = Rc::downgrade(app);
    let scheduled = Cell::new(None::<MessageTicket>);

    app.subscribe(move |state| {
        current.set(bloglist::view::render(state));

        let Some(message) = state.notifier.current() else {
            return;
        };
        if scheduled.get() == Some(message.ticket) {
            return;
        }
        scheduled.set(Some(message.ticket));

        let ticket = message.ticket;
        let delay = message.remaining(Utc::now()).as_millis() as u32;
        let weak = weak.clone();
        Timeout::new(delay, move || {
            if let Some(app) = weak.upgrade() {
                app.expire_message(ticket);
            }
        })
        .forget();
    });
}

fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
