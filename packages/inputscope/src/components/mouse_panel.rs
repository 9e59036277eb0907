use super::{CaptureCounter, ClearButton, EffectMarker, EventLogView, LogTone, PressableRegion};
use crate::hooks::{use_pointer_capture, use_pointer_listeners};
use crate::use_app_config;
use dioxus::prelude::*;
use inputscope_core::{Label, PointerEffect};

#[component]
pub fn MousePanel() -> Element {
    let locale = use_app_config().locale;
    let capture = use_pointer_capture();
    let listeners = use_pointer_listeners(capture);

    let state = capture.state();
    let state = state.read();
    let position = state.position();
    let status = if state.is_dragging() {
        locale.label(Label::Dragging)
    } else {
        locale.label(Label::Idle)
    };
    let effects: Vec<PointerEffect> = state.effects().active().copied().collect();
    let count = state.log().count();
    let records = state.log().snapshot();

    let title = locale.label(Label::MousePanel);
    let hint = locale.label(Label::MouseHint);
    let copy_label = locale.label(Label::CopyLog);

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "{title}" }

            PressableRegion {
                class: "capture-region",
                listeners,
                onmounted: move |element| capture.set_surface(element),
                onpress: move |press| capture.on_press(press),

                div { class: "coordinates", "X: {position.x}, Y: {position.y}" }
                div { class: "region-text",
                    div { class: "region-hint", "{hint}" }
                    div { class: "drag-status", "{status}" }
                }
                for effect in effects {
                    EffectMarker { key: "{effect.id}", effect }
                }
            }

            CaptureCounter { count, label: locale.label(Label::EventsCaptured) }
            EventLogView {
                records,
                empty_hint: locale.label(Label::MouseLogEmpty),
                tone: LogTone::Mouse,
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
