//! # client
//!
//! Leptos + WASM front end for the drag-and-drop UI builder.
//!
//! The `board` crate owns every rule about elements, drags, and the editor;
//! this crate renders the sidebar palette, the drop surface, the edit dialog,
//! and the import/export panel, and adapts DOM mouse, touch, and keyboard
//! events into `board` calls. Browser-facing modules build only with the
//! `csr` feature; state and utility helpers also build natively for tests.

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
pub mod state;
pub mod util;

/// Install the console logger and panic hook, then mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    log::info!("starting ui builder");
    leptos::mount::mount_to_body(app::App);
}
