//! URLibrary UI layer.
//!
//! The view controller, rendering surface and prompt seam are plain Rust and
//! always built. The `gui` feature adds the `wry` webview shell that hosts the
//! page and forwards its events to [`crate::rpc_handler`].

pub mod html_renderer;
pub mod prompt;
pub mod view_controller;

#[cfg(feature = "gui")]
pub mod webview_app;
