//! Hooks that keep capture state in signals and feed it from Dioxus events.

mod keyboard;
mod pointer;
mod theme;

pub use keyboard::{use_keyboard_capture, KeyboardCaptureHandle};
pub use pointer::{use_pointer_capture, use_pointer_listeners, PointerCaptureHandle, PointerListeners};
pub use theme::{use_theme, ThemeHandle};
