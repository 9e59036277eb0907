//! Capture regions.
//!
//! [`RegionHost`] is a plain container that forwards pointer events, reports when it is
//! mounted and spreads whatever attributes it is handed onto its `div`. [`PressableRegion`]
//! layers button semantics on top: it is focusable, announces itself as a button and turns
//! both clicks and Enter/Space into a single `onpress`.

use crate::hooks::PointerListeners;
use dioxus::prelude::*;
use std::rc::Rc;

/// What activated a [`PressableRegion`].
#[derive(Clone)]
pub enum Press {
    Pointer(MouseEvent),
    Keyboard,
}

#[component]
pub fn RegionHost(
    listeners: PointerListeners,
    onmounted: EventHandler<Rc<MountedData>>,
    onclick: Option<EventHandler<MouseEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            onmounted: move |evt: MountedEvent| onmounted.call(evt.data()),
            onmousemove: move |evt| listeners.onmousemove.call(evt),
            onmouseenter: move |evt| listeners.onmouseenter.call(evt),
            onmouseleave: move |evt| listeners.onmouseleave.call(evt),
            onmousedown: move |evt| listeners.onmousedown.call(evt),
            onmouseup: move |evt| listeners.onmouseup.call(evt),
            ondoubleclick: move |evt| listeners.ondoubleclick.call(evt),
            oncontextmenu: move |evt| listeners.oncontextmenu.call(evt),
            onwheel: move |evt| listeners.onwheel.call(evt),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            onkeydown: move |evt| {
                if let Some(handler) = onkeydown {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn PressableRegion(
    listeners: PointerListeners,
    onmounted: EventHandler<Rc<MountedData>>,
    onpress: EventHandler<Press>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attributes = attributes;
    attributes.push(Attribute::new("role", "button", None, false));
    attributes.push(Attribute::new("tabindex", "0", None, false));

    let onclick = use_callback(move |evt: MouseEvent| onpress.call(Press::Pointer(evt)));
    let onkeydown = use_callback(move |evt: KeyboardEvent| {
        if is_activation_key(&evt.key()) {
            // Space would otherwise scroll the page
            evt.prevent_default();
            onpress.call(Press::Keyboard);
        }
    });

    rsx! {
        RegionHost {
            listeners,
            onmounted,
            onclick,
            onkeydown,
            attributes,
            {children}
        }
    }
}

fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Tab));
    }
}
