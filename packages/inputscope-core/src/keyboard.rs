//! The keyboard half of the capture surface: one text field plus a handful of page-wide
//! shortcuts.

use crate::{DefaultAction, EventLog, Locale, Message, SharedClock};

/// Modifier keys held during a key event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// `" (Ctrl+Shift)"` style suffix, or an empty string when nothing is held.
    pub fn describe(self) -> String {
        let held: Vec<&str> = [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        if held.is_empty() {
            String::new()
        } else {
            format!(" ({})", held.join("+"))
        }
    }
}

/// The parts of a native keyboard event the surface cares about. `key` and `code` use the
/// DOM spellings (`"a"`, `"Escape"`, `"KeyA"`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeySample {
    pub key: String,
    pub code: String,
    pub modifiers: KeyModifiers,
}

impl KeySample {
    pub fn new(key: impl Into<String>, code: impl Into<String>, modifiers: KeyModifiers) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers,
        }
    }
}

/// Shortcuts caught at the page level whatever has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalShortcut {
    Escape,
    /// F1
    Help,
    /// Ctrl+S
    Save,
}

impl GlobalShortcut {
    /// Pure so it can run synchronously inside a native listener, before the browser acts
    /// on the key.
    pub fn classify(key: &str, modifiers: KeyModifiers) -> Option<Self> {
        if key == "Escape" {
            Some(GlobalShortcut::Escape)
        } else if key == "F1" {
            Some(GlobalShortcut::Help)
        } else if modifiers.ctrl && key.eq_ignore_ascii_case("s") {
            Some(GlobalShortcut::Save)
        } else {
            None
        }
    }

    /// Help and Save would open browser UI, so their defaults are suppressed.
    pub fn default_action(self) -> DefaultAction {
        match self {
            GlobalShortcut::Escape => DefaultAction::Allow,
            GlobalShortcut::Help | GlobalShortcut::Save => DefaultAction::Suppress,
        }
    }

    fn message(self) -> Message<'static> {
        match self {
            GlobalShortcut::Escape => Message::EscapePressed,
            GlobalShortcut::Help => Message::HelpPressed,
            GlobalShortcut::Save => Message::SavePressed,
        }
    }
}

/// State behind the keyboard panel: the field's text and its log.
#[derive(Debug)]
pub struct KeyboardCapture {
    log: EventLog,
    value: String,
    locale: Locale,
}

impl KeyboardCapture {
    pub fn new(clock: SharedClock, locale: Locale) -> Self {
        Self {
            log: EventLog::new(clock),
            value: String::new(),
            locale,
        }
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Current text of the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn note(&mut self, event_name: &str, message: Message<'_>) {
        let details = self.locale.message(message);
        self.log.record(event_name, details);
    }

    pub fn on_key_down(&mut self, sample: &KeySample) {
        let modifiers = sample.modifiers.describe();
        self.note(
            "keydown",
            Message::KeyPressed {
                key: &sample.key,
                code: &sample.code,
                modifiers: &modifiers,
            },
        );
    }

    pub fn on_key_up(&mut self, sample: &KeySample) {
        self.note(
            "keyup",
            Message::KeyReleased {
                key: &sample.key,
                code: &sample.code,
            },
        );
    }

    pub fn on_key_press(&mut self, sample: &KeySample) {
        self.note("keypress", Message::CharacterTyped { key: &sample.key });
    }

    pub fn on_focus(&mut self) {
        self.note("focus", Message::FieldFocused);
    }

    pub fn on_blur(&mut self) {
        self.note("blur", Message::FieldBlurred);
    }

    pub fn on_input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        let details = self.locale.message(Message::ValueChanged(&self.value));
        self.log.record("input (onChange)", details);
    }

    /// Logs a shortcut caught by the page-wide listener.
    pub fn on_global_shortcut(&mut self, shortcut: GlobalShortcut) {
        self.note("keydown", shortcut.message());
    }

    /// Empties the field, the log and the count together. The clear is itself logged.
    pub fn clear(&mut self) {
        self.value.clear();
        let details = self.locale.message(Message::KeyboardLogCleared);
        self.log.clear(details);
    }
}
