use crate::{host, use_app_config};
use dioxus::prelude::*;
use futures_util::StreamExt;
use inputscope_core::{GlobalShortcut, KeyModifiers, KeySample, KeyboardCapture, SystemClock};
use std::rc::Rc;

/// A [`KeyboardCapture`] held in a signal.
#[derive(Clone, Copy)]
pub struct KeyboardCaptureHandle {
    state: Signal<KeyboardCapture>,
}

/// Also registers the page-wide shortcut listener for as long as the calling component is
/// mounted.
pub fn use_keyboard_capture() -> KeyboardCaptureHandle {
    let config = use_app_config();
    let mut state = use_signal(|| KeyboardCapture::new(SystemClock::shared(), config.locale));

    let shortcuts = use_coroutine(move |mut rx: UnboundedReceiver<GlobalShortcut>| async move {
        while let Some(shortcut) = rx.next().await {
            state.write().on_global_shortcut(shortcut);
        }
    });

    use_hook(move || match host::GlobalKeySubscription::register(shortcuts.tx()) {
        Ok(subscription) => Some(Rc::new(subscription)),
        Err(err) => {
            tracing::warn!("page-wide shortcuts are unavailable: {err}");
            None
        }
    });

    KeyboardCaptureHandle { state }
}

impl KeyboardCaptureHandle {
    pub fn state(&self) -> Signal<KeyboardCapture> {
        self.state
    }

    pub fn on_key_down(mut self, evt: KeyboardEvent) {
        self.state.write().on_key_down(&key_sample(&evt));
    }

    pub fn on_key_up(mut self, evt: KeyboardEvent) {
        self.state.write().on_key_up(&key_sample(&evt));
    }

    pub fn on_key_press(mut self, evt: KeyboardEvent) {
        self.state.write().on_key_press(&key_sample(&evt));
    }

    pub fn on_focus(mut self, _evt: FocusEvent) {
        self.state.write().on_focus();
    }

    pub fn on_blur(mut self, _evt: FocusEvent) {
        self.state.write().on_blur();
    }

    pub fn on_input(mut self, evt: FormEvent) {
        self.state.write().on_input(evt.value());
    }

    pub fn clear(mut self) {
        self.state.write().clear();
    }

    pub fn copy_log(self) {
        match self.state.peek().log().export_json() {
            Ok(json) => host::copy_text(json),
            Err(err) => tracing::warn!("could not export the keyboard log: {err}"),
        }
    }
}

fn key_sample(evt: &KeyboardEvent) -> KeySample {
    KeySample::new(
        evt.key().to_string(),
        evt.code().to_string(),
        key_modifiers(evt.modifiers()),
    )
}

fn key_modifiers(modifiers: Modifiers) -> KeyModifiers {
    KeyModifiers {
        ctrl: modifiers.contains(Modifiers::CONTROL),
        alt: modifiers.contains(Modifiers::ALT),
        shift: modifiers.contains(Modifiers::SHIFT),
        meta: modifiers.contains(Modifiers::META),
    }
}
