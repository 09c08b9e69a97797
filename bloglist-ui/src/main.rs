//! Blog List
//!
//! Browser front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Log in; the session survives reloads via `localStorage`
//! - Blogs sorted by likes, with like and (for owners) remove
//! - Blog creation panel
//! - Auto-expiring notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in the shared `bloglist` controller; the
//! components here only render it and forward events.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
