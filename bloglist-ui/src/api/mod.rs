//! API Access
//!
//! Browser clients for the remote blog service.

pub mod client;

pub use client::{get_api_base, BrowserApi};
