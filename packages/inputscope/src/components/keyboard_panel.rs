use super::{CaptureCounter, ClearButton, EventLogView, LogTone};
use crate::hooks::use_keyboard_capture;
use crate::use_app_config;
use dioxus::prelude::*;
use inputscope_core::Label;

#[component]
pub fn KeyboardPanel() -> Element {
    let locale = use_app_config().locale;
    let capture = use_keyboard_capture();

    let state = capture.state();
    let state = state.read();
    let value = state.value().to_string();
    let count = state.log().count();
    let records = state.log().snapshot();

    let title = locale.label(Label::KeyboardPanel);
    let placeholder = locale.label(Label::FieldPlaceholder);
    let shortcut_hint = locale.label(Label::ShortcutHint);
    let copy_label = locale.label(Label::CopyLog);

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "{title}" }

            div { class: "field-group",
                input {
                    class: "capture-field",
                    r#type: "text",
                    value: "{value}",
                    placeholder,
                    oninput: move |evt| capture.on_input(evt),
                    onkeydown: move |evt| capture.on_key_down(evt),
                    onkeyup: move |evt| capture.on_key_up(evt),
                    onkeypress: move |evt| capture.on_key_press(evt),
                    onfocus: move |evt| capture.on_focus(evt),
                    onblur: move |evt| capture.on_blur(evt),
                }
                div { class: "shortcut-hint", "{shortcut_hint}" }
            }

            CaptureCounter { count, label: locale.label(Label::EventsCaptured) }
            EventLogView {
                records,
                empty_hint: locale.label(Label::KeyboardLogEmpty),
                tone: LogTone::Keyboard,
            }
            div { class: "panel-actions",
                ClearButton {
                    label: locale.label(Label::ClearLog),
                    onclear: move |_| capture.clear(),
                }
                button {
                    class: "copy-button",
                    r#type: "button",
                    onclick: move |_| capture.copy_log(),
                    "{copy_label}"
                }
            }
        }
    }
}
