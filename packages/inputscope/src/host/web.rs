use futures_channel::mpsc::UnboundedSender;
use inputscope_core::{GlobalShortcut, HostError, KeyModifiers, Locale, MemoryThemeHost, ThemeHost};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_error(err: JsValue) -> HostError {
    HostError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or_else(|| HostError::Js("no global window".to_string()))
}

fn local_storage() -> Result<web_sys::Storage, HostError> {
    window()?
        .local_storage()
        .map_err(js_error)?
        .ok_or(HostError::StorageUnavailable)
}

/// `localStorage`, `matchMedia` and the class list on `<html>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebThemeHost;

impl ThemeHost for WebThemeHost {
    fn load(&self, key: &str) -> Result<Option<String>, HostError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn prefers_dark(&self) -> bool {
        window()
            .ok()
            .and_then(|window| window.match_media(DARK_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), HostError> {
        let root = window()?
            .document()
            .and_then(|document| document.document_element())
            .ok_or(HostError::NoRootElement)?;
        root.class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(js_error)
    }
}

pub fn platform_theme_host() -> Rc<dyn ThemeHost> {
    if web_sys::window().is_some() {
        Rc::new(WebThemeHost)
    } else {
        // web workers and other window-less contexts
        Rc::new(MemoryThemeHost::new())
    }
}

pub fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| Locale::from_language_tag(&tag))
        .unwrap_or_default()
}

pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// The page-wide `keydown` listener, registered for as long as this value lives.
///
/// The listener decides synchronously whether a key is one of the global shortcuts and
/// cancels the browser default when the shortcut asks for it. The shortcut itself is sent
/// down `shortcuts` to be logged inside the Dioxus runtime.
pub struct GlobalKeySubscription {
    target: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl GlobalKeySubscription {
    pub fn register(shortcuts: UnboundedSender<GlobalShortcut>) -> Result<Self, HostError> {
        let target = window()?.document().ok_or(HostError::NoRootElement)?;

        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                let modifiers = KeyModifiers {
                    ctrl: event.ctrl_key(),
                    alt: event.alt_key(),
                    shift: event.shift_key(),
                    meta: event.meta_key(),
                };
                let Some(shortcut) = GlobalShortcut::classify(&event.key(), modifiers) else {
                    return;
                };
                if shortcut.default_action().is_suppressed() {
                    event.prevent_default();
                }
                if shortcuts.unbounded_send(shortcut).is_err() {
                    tracing::debug!(?shortcut, "shortcut arrived after the keyboard panel closed");
                }
            },
        );

        target
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        tracing::debug!("global keydown listener registered");

        Ok(Self { target, callback })
    }
}

impl Drop for GlobalKeySubscription {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => tracing::debug!("global keydown listener removed"),
            Err(err) => tracing::warn!("could not remove the global keydown listener: {}", js_error(err)),
        }
    }
}

impl std::fmt::Debug for GlobalKeySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalKeySubscription").finish_non_exhaustive()
    }
}
