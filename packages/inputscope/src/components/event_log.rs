//! Presentational pieces shared by both panels. Nothing in here holds state.

use dioxus::prelude::*;
use inputscope_core::{EventRecord, PointerEffect};

/// Which panel a log belongs to; only changes the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTone {
    Mouse,
    Keyboard,
}

impl LogTone {
    fn class(self) -> &'static str {
        match self {
            LogTone::Mouse => "tone-mouse",
            LogTone::Keyboard => "tone-keyboard",
        }
    }
}

/// Records newest first, or `empty_hint` when there are none.
#[component]
pub fn EventLogView(records: Vec<EventRecord>, empty_hint: &'static str, tone: LogTone) -> Element {
    let tone = tone.class();
    rsx! {
        div { class: "event-log {tone}",
            for record in records.iter() {
                div { key: "{record.id}", class: "event-record",
                    strong { "[{record.timestamp}]" }
                    " {record.event_name} {record.details}"
                }
            }
            if records.is_empty() {
                div { class: "event-log-empty", "{empty_hint}" }
            }
        }
    }
}

#[component]
pub fn CaptureCounter(count: u64, label: &'static str) -> Element {
    rsx! {
        div { class: "capture-counter",
            span { class: "capture-count", "{count} {label}" }
        }
    }
}

#[component]
pub fn ClearButton(label: &'static str, onclear: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "clear-button",
            r#type: "button",
            onclick: move |_| onclear.call(()),
            "{label}"
        }
    }
}

/// The ring drawn where a button went down.
#[component]
pub fn EffectMarker(effect: PointerEffect) -> Element {
    rsx! {
        div {
            class: "effect-marker",
            left: "{effect.x}px",
            top: "{effect.y}px",
        }
    }
}
