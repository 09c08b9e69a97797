//! State Management
//!
//! Application state itself lives in the `bloglist` controller; this module
//! holds the browser-side persistence it needs.

pub mod session;

pub use session::LocalSessionStore;
