//! Thin wrappers over browser APIs.
//!
//! With `csr` these call into `web_sys`; without it (native tests) they only
//! log, so page code can call them unconditionally.

use leptos::html::Input;
use leptos::prelude::*;

/// Show a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    log::error!("alert failed: {err:?}");
                }
            }
            None => log::error!("no window for alert: {message}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::error!("{message}");
    }
}

/// Focus the input behind `node` once it is mounted.
pub fn focus_on_mount(node: NodeRef<Input>) {
    Effect::new(move || {
        if let Some(input) = node.get() {
            if let Err(err) = input.focus() {
                log::warn!("focus failed: {err:?}");
            }
        }
    });
}
