use crate::components::Press;
use crate::{host, use_app_config};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use inputscope_core::{
    EffectId, Point, PointerButton, PointerCapture, PointerEventKind, PointerSample, SurfaceRect,
    SystemClock, EFFECT_LIFETIME,
};
use std::rc::Rc;

/// A [`PointerCapture`] held in a signal, together with the element its coordinates are
/// relative to.
///
/// Every handler is queued onto the runtime behind a measurement of that element, so the
/// log keeps the order the events fired in. Defaults that must be cancelled are cancelled
/// before anything is queued.
#[derive(Clone, Copy)]
pub struct PointerCaptureHandle {
    state: Signal<PointerCapture>,
    surface: Signal<Option<Rc<MountedData>>>,
}

pub fn use_pointer_capture() -> PointerCaptureHandle {
    let config = use_app_config();
    let state = use_signal(|| PointerCapture::new(SystemClock::shared(), config.locale));
    let surface = use_signal(|| None);
    PointerCaptureHandle { state, surface }
}

impl PointerCaptureHandle {
    pub fn state(&self) -> Signal<PointerCapture> {
        self.state
    }

    /// Sets the element pointer coordinates are measured against.
    pub fn set_surface(mut self, element: Rc<MountedData>) {
        self.surface.set(Some(element));
    }

    fn dispatch(self, apply: impl FnOnce(&mut PointerCapture, Option<SurfaceRect>) + 'static) {
        let mut state = self.state;
        let element = (*self.surface.peek()).clone();
        spawn(async move {
            let surface = match element {
                Some(element) => measure(&element).await,
                None => None,
            };
            let mut capture = state.write();
            apply(&mut *capture, surface);
        });
    }

    pub fn on_move(self, evt: MouseEvent) {
        let sample = pointer_sample(&evt);
        self.dispatch(move |capture, surface| capture.on_move(sample, surface));
    }

    pub fn on_enter(self, _evt: MouseEvent) {
        self.dispatch(|capture, _| capture.on_enter());
    }

    pub fn on_leave(self, _evt: MouseEvent) {
        self.dispatch(|capture, _| capture.on_leave());
    }

    pub fn on_down(self, evt: MouseEvent) {
        self.pointer_down(pointer_sample(&evt));
    }

    /// [`on_down`](Self::on_down) for a sample that has already been read off the event.
    pub fn pointer_down(self, sample: PointerSample) {
        self.dispatch(move |capture, surface| {
            if let Some(effect) = capture.on_down(sample, surface) {
                self.expire(effect);
            }
        });
    }

    pub fn on_up(self, evt: MouseEvent) {
        let sample = pointer_sample(&evt);
        self.dispatch(move |capture, surface| capture.on_up(sample, surface));
    }

    pub fn on_click(self, evt: MouseEvent) {
        let sample = pointer_sample(&evt);
        self.dispatch(move |capture, surface| capture.on_click(sample, surface));
    }

    pub fn on_double_click(self, evt: MouseEvent) {
        let sample = pointer_sample(&evt);
        self.dispatch(move |capture, surface| capture.on_double_click(sample, surface));
    }

    pub fn on_context_menu(self, evt: MouseEvent) {
        apply_default(PointerEventKind::ContextMenu, &evt);
        let sample = pointer_sample(&evt);
        self.dispatch(move |capture, surface| capture.on_context_menu(sample, surface));
    }

    pub fn on_wheel(self, evt: WheelEvent) {
        apply_default(PointerEventKind::Wheel, &evt);
        let delta_y = evt.delta().strip_units().y;
        self.dispatch(move |capture, _| capture.on_wheel(delta_y));
    }

    /// A press on the region, from a pointer click or from Enter/Space while focused.
    pub fn on_press(self, press: Press) {
        match press {
            Press::Pointer(evt) => self.on_click(evt),
            Press::Keyboard => self.dispatch(|capture, _| capture.on_keyboard_press()),
        }
    }

    pub fn clear(self) {
        self.dispatch(|capture, _| capture.clear());
    }

    /// Copies the log to the clipboard as JSON.
    pub fn copy_log(self) {
        match self.state.peek().log().export_json() {
            Ok(json) => host::copy_text(json),
            Err(err) => tracing::warn!("could not export the mouse log: {err}"),
        }
    }

    /// Removes the marker once its animation is over.
    fn expire(self, effect: EffectId) {
        let mut state = self.state;
        spawn(async move {
            host::sleep(EFFECT_LIFETIME).await;
            // the panel may have been torn down while we slept
            let Ok(mut capture) = state.try_write() else {
                return;
            };
            let effects = capture.effects_mut();
            effects.remove(effect);
            effects.sweep();
        });
    }
}

async fn measure(element: &MountedData) -> Option<SurfaceRect> {
    match element.get_client_rect().await {
        Ok(rect) => Some(SurfaceRect::new(rect.origin.x, rect.origin.y)),
        Err(err) => {
            tracing::debug!("could not measure the capture surface: {err:?}");
            None
        }
    }
}

fn apply_default<T: ?Sized + 'static>(kind: PointerEventKind, evt: &Event<T>) {
    if kind.default_action().is_suppressed() {
        evt.prevent_default();
    }
}

fn pointer_sample(evt: &MouseEvent) -> PointerSample {
    let client = evt.client_coordinates();
    PointerSample::new(
        Point::new(client.x, client.y),
        pointer_button(evt.trigger_button()),
    )
}

fn pointer_button(button: Option<MouseButton>) -> PointerButton {
    match button {
        Some(MouseButton::Primary) => PointerButton::Left,
        Some(MouseButton::Auxiliary) => PointerButton::Middle,
        Some(MouseButton::Secondary) => PointerButton::Right,
        _ => PointerButton::Unknown,
    }
}

/// The handlers a capture region attaches, one per native pointer event.
#[derive(Clone, Copy, PartialEq)]
pub struct PointerListeners {
    pub onmousemove: EventHandler<MouseEvent>,
    pub onmouseenter: EventHandler<MouseEvent>,
    pub onmouseleave: EventHandler<MouseEvent>,
    pub onmousedown: EventHandler<MouseEvent>,
    pub onmouseup: EventHandler<MouseEvent>,
    pub ondoubleclick: EventHandler<MouseEvent>,
    pub oncontextmenu: EventHandler<MouseEvent>,
    pub onwheel: EventHandler<WheelEvent>,
}

/// Stable listeners that forward to `capture`. Clicks are not included: they arrive as
/// presses, see [`PointerCaptureHandle::on_press`].
pub fn use_pointer_listeners(capture: PointerCaptureHandle) -> PointerListeners {
    PointerListeners {
        onmousemove: use_callback(move |evt| capture.on_move(evt)),
        onmouseenter: use_callback(move |evt| capture.on_enter(evt)),
        onmouseleave: use_callback(move |evt| capture.on_leave(evt)),
        onmousedown: use_callback(move |evt| capture.on_down(evt)),
        onmouseup: use_callback(move |evt| capture.on_up(evt)),
        ondoubleclick: use_callback(move |evt| capture.on_double_click(evt)),
        oncontextmenu: use_callback(move |evt| capture.on_context_menu(evt)),
        onwheel: use_callback(move |evt| capture.on_wheel(evt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_follow_the_dom_numbering() {
        assert_eq!(pointer_button(Some(MouseButton::Primary)), PointerButton::Left);
        assert_eq!(pointer_button(Some(MouseButton::Auxiliary)), PointerButton::Middle);
        assert_eq!(pointer_button(Some(MouseButton::Secondary)), PointerButton::Right);
        assert_eq!(pointer_button(Some(MouseButton::Fourth)), PointerButton::Unknown);
        assert_eq!(pointer_button(None), PointerButton::Unknown);
    }
}
