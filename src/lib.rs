//! # auth-portal
//!
//! Leptos frontend with the registration and login forms for the auth
//! service. Each form validates its draft, posts a renamed payload to
//! `/auth/register` or `/auth/login` and moves on to the next route.
//!
//! Schema rules, form state, routing and the submit flow are plain Rust and
//! are tested natively. Browser glue (console logging, `alert`, input focus)
//! only compiles with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod flow;
pub mod forms;
pub mod net;
pub mod pages;
pub mod routes;
pub mod util;

/// Install browser logging and mount [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
