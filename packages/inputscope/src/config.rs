use crate::host::browser_locale;
use dioxus::prelude::*;
use inputscope_core::Locale;

/// Settings shared with every panel through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: Locale,
}

impl AppConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for AppConfig {
    /// Follows the browser's language.
    fn default() -> Self {
        Self {
            locale: browser_locale(),
        }
    }
}

/// The config provided by an ancestor, or the default when rendered on its own.
pub fn use_app_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_default()
}
