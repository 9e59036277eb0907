//! inputscope: a page that shows mouse and keyboard events as they arrive.
//!
//! The capture logic lives in `inputscope-core`. This crate wires it to Dioxus signals,
//! renders it, and talks to the browser for storage, the color-scheme query and the
//! page-wide shortcut listener.

pub mod components;
pub mod config;
pub mod hooks;
pub mod host;

pub use components::App;
pub use config::{use_app_config, AppConfig};
