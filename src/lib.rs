//! URLibrary: a tag-based personal URL library with a local webview UI.
//!
//! Bookmarks live in a single JSON slot of a key-value store (SQLite on disk,
//! a map in tests). `ui::view_controller` drives the page through
//! `managers::bookmark_store`; `rpc_handler` exposes it to the webview.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
pub mod ui;
