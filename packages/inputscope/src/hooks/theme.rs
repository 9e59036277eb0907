use crate::host;
use dioxus::prelude::*;
use inputscope_core::ThemePreference;

/// The page-wide theme flag.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    pref: Signal<ThemePreference>,
}

/// Reads the saved (or ambient) theme once and keeps the root marker in step with it.
pub fn use_theme() -> ThemeHandle {
    let pref = use_signal(|| ThemePreference::read(host::platform_theme_host()));
    use_effect(move || pref.read().sync());
    ThemeHandle { pref }
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.pref.read().is_dark()
    }

    pub fn toggle(mut self) {
        self.pref.write().toggle();
    }
}
