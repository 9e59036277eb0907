//! The persisted light/dark preference.

use crate::{HostError, ParseThemeError};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark(!self.is_dark())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// The platform pieces the theme preference touches: key-value storage, the ambient
/// color-scheme signal and the root element's class list.
pub trait ThemeHost {
    fn load(&self, key: &str) -> Result<Option<String>, HostError>;

    fn store(&self, key: &str, value: &str) -> Result<(), HostError>;

    /// Whether the platform asks for a dark color scheme.
    fn prefers_dark(&self) -> bool;

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), HostError>;
}

/// A [`ThemeHost`] that keeps everything in memory. Used off the web and in tests.
#[derive(Debug, Default)]
pub struct MemoryThemeHost {
    storage: RefCell<HashMap<String, String>>,
    storage_unavailable: Cell<bool>,
    prefers_dark: Cell<bool>,
    root_classes: RefCell<BTreeSet<String>>,
}

impl MemoryThemeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefers_dark(self, prefers_dark: bool) -> Self {
        self.prefers_dark.set(prefers_dark);
        self
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every storage access fail, like a browser with storage disabled.
    pub fn with_storage_unavailable(self) -> Self {
        self.storage_unavailable.set(true);
        self
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }
}

impl ThemeHost for MemoryThemeHost {
    fn load(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.storage_unavailable.get() {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.stored(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.storage_unavailable.get() {
            return Err(HostError::StorageUnavailable);
        }
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), HostError> {
        let mut classes = self.root_classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }
}

/// The page-wide theme flag.
///
/// Persisted storage is the source of truth; when it holds nothing usable the platform's
/// color-scheme preference decides. Host failures are logged and otherwise ignored.
pub struct ThemePreference {
    host: Rc<dyn ThemeHost>,
    theme: Theme,
}

impl ThemePreference {
    pub fn read(host: Rc<dyn ThemeHost>) -> Self {
        let theme = Self::resolve(host.as_ref());
        tracing::debug!(%theme, "resolved theme");
        Self { host, theme }
    }

    /// The persisted theme if there is one, else the ambient preference.
    pub fn resolve(host: &dyn ThemeHost) -> Theme {
        let stored = host.load(THEME_STORAGE_KEY).unwrap_or_else(|err| {
            tracing::warn!("could not read the saved theme: {err}");
            None
        });

        match stored.as_deref().map(Theme::from_str) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                tracing::warn!("ignoring saved theme: {err}");
                Theme::from_dark(host.prefers_dark())
            }
            None => Theme::from_dark(host.prefers_dark()),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flips the theme, saves it and updates the root marker. Returns whether dark mode is
    /// now on.
    pub fn toggle(&mut self) -> bool {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "theme toggled");

        if let Err(err) = self.host.store(THEME_STORAGE_KEY, self.theme.as_str()) {
            tracing::warn!("could not save the theme: {err}");
        }
        self.sync();
        self.is_dark()
    }

    /// Re-applies the root marker for the current theme.
    pub fn sync(&self) {
        if let Err(err) = self.host.set_root_class(DARK_CLASS, self.is_dark()) {
            tracing::warn!("could not apply the theme class: {err}");
        }
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_signal_decides_when_nothing_is_saved() {
        let dark = MemoryThemeHost::new().with_prefers_dark(true);
        assert_eq!(ThemePreference::resolve(&dark), Theme::Dark);

        let light = MemoryThemeHost::new().with_prefers_dark(false);
        assert_eq!(ThemePreference::resolve(&light), Theme::Light);
    }

    #[test]
    fn saved_value_beats_the_ambient_signal() {
        let host = MemoryThemeHost::new()
            .with_prefers_dark(true)
            .with_stored(THEME_STORAGE_KEY, "light");
        assert_eq!(ThemePreference::resolve(&host), Theme::Light);
    }

    #[test]
    fn garbage_counts_as_unset() {
        let host = MemoryThemeHost::new()
            .with_prefers_dark(true)
            .with_stored(THEME_STORAGE_KEY, "sepia");
        assert_eq!(ThemePreference::resolve(&host), Theme::Dark);
    }

    #[test]
    fn missing_storage_counts_as_unset() {
        let host = Rc::new(
            MemoryThemeHost::new()
                .with_prefers_dark(true)
                .with_storage_unavailable(),
        );
        let mut pref = ThemePreference::read(host.clone());
        assert!(pref.is_dark());

        // saving fails quietly but the marker still follows the flag
        assert!(!pref.toggle());
        assert!(!host.has_root_class(DARK_CLASS));
    }

    #[test]
    fn toggle_persists_and_marks_the_root() {
        let host = Rc::new(MemoryThemeHost::new());
        let mut pref = ThemePreference::read(host.clone());
        assert!(!pref.is_dark());

        assert!(pref.toggle());
        assert_eq!(host.stored(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert!(host.has_root_class(DARK_CLASS));
    }

    #[test]
    fn toggling_twice_round_trips() {
        let host = Rc::new(MemoryThemeHost::new().with_stored(THEME_STORAGE_KEY, "dark"));
        let mut pref = ThemePreference::read(host.clone());
        pref.sync();
        assert!(host.has_root_class(DARK_CLASS));

        pref.toggle();
        pref.toggle();

        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(host.stored(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert!(host.has_root_class(DARK_CLASS));
    }

    #[test]
    fn theme_strings() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled().to_string(), "dark");
    }
}
