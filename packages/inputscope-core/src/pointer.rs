//! The pointer half of the capture surface.

use crate::{
    relative_point, EffectId, EventLog, Locale, Message, Point, PointerEffects, SharedClock,
    SurfaceRect,
};

/// What the caller should do with the native event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Allow,
    Suppress,
}

impl DefaultAction {
    pub fn is_suppressed(self) -> bool {
        matches!(self, DefaultAction::Suppress)
    }
}

/// The native pointer events a capture surface listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Enter,
    Leave,
    Down,
    Up,
    Click,
    DoubleClick,
    ContextMenu,
    Wheel,
}

impl PointerEventKind {
    /// The tag records of this kind are logged under.
    pub fn event_name(self) -> &'static str {
        match self {
            PointerEventKind::Move => "mousemove",
            PointerEventKind::Enter => "mouseenter",
            PointerEventKind::Leave => "mouseleave",
            PointerEventKind::Down => "mousedown",
            PointerEventKind::Up => "mouseup",
            PointerEventKind::Click => "click",
            PointerEventKind::DoubleClick => "dblclick",
            PointerEventKind::ContextMenu => "contextmenu",
            PointerEventKind::Wheel => "wheel",
        }
    }

    /// Neither the native context menu nor page scrolling happen over the surface.
    ///
    /// This has to be known before the event is handled: the surface's bounding box is
    /// looked up asynchronously and the native default can only be cancelled up front.
    pub fn default_action(self) -> DefaultAction {
        match self {
            PointerEventKind::ContextMenu | PointerEventKind::Wheel => DefaultAction::Suppress,
            _ => DefaultAction::Allow,
        }
    }
}

/// The button behind a pointer event, from the DOM `button` number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    #[default]
    Unknown,
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Left,
            1 => PointerButton::Middle,
            2 => PointerButton::Right,
            _ => PointerButton::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    /// Positive deltas scroll down; zero counts as up.
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            WheelDirection::Down
        } else {
            WheelDirection::Up
        }
    }
}

/// The parts of a native pointer event the surface cares about.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client: Point,
    pub button: PointerButton,
}

impl PointerSample {
    pub fn new(client: Point, button: PointerButton) -> Self {
        Self { client, button }
    }
}

/// Turns pointer events on a region into log records, click markers and a live position.
///
/// Handlers that need coordinates take the surface's bounding box as it is *now*; pass
/// `None` while the region is not mounted and the event is skipped.
#[derive(Debug)]
pub struct PointerCapture {
    log: EventLog,
    effects: PointerEffects,
    position: Point,
    dragging: bool,
    locale: Locale,
}

impl PointerCapture {
    pub fn new(clock: SharedClock, locale: Locale) -> Self {
        Self {
            log: EventLog::new(clock.clone()),
            effects: PointerEffects::new(clock),
            position: Point::default(),
            dragging: false,
            locale,
        }
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn effects(&self) -> &PointerEffects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut PointerEffects {
        &mut self.effects
    }

    /// Last known pointer position relative to the surface.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn note(&mut self, kind: PointerEventKind, message: Message<'_>) {
        let details = self.locale.message(message);
        self.log.record(kind.event_name(), details);
    }

    pub fn on_move(&mut self, sample: PointerSample, surface: Option<SurfaceRect>) {
        let Some(rect) = surface else { return };
        let at = relative_point(sample.client, rect);
        self.position = at;
        if self.dragging {
            self.note(PointerEventKind::Move, Message::Dragging(at));
        }
    }

    pub fn on_enter(&mut self) {
        self.note(PointerEventKind::Enter, Message::PointerEntered);
    }

    pub fn on_leave(&mut self) {
        self.note(PointerEventKind::Leave, Message::PointerLeft);
        self.dragging = false;
    }

    /// Starts a drag and drops a click marker. Returns the marker so the caller can
    /// schedule its removal.
    pub fn on_down(
        &mut self,
        sample: PointerSample,
        surface: Option<SurfaceRect>,
    ) -> Option<EffectId> {
        // the drag starts even if the surface can't be measured yet
        self.dragging = true;
        let rect = surface?;
        let at = relative_point(sample.client, rect);
        let effect = self.effects.spawn(at);
        self.note(PointerEventKind::Down, Message::ButtonPressed(sample.button, at));
        Some(effect)
    }

    pub fn on_up(&mut self, sample: PointerSample, surface: Option<SurfaceRect>) {
        self.dragging = false;
        let Some(rect) = surface else { return };
        let at = relative_point(sample.client, rect);
        self.note(PointerEventKind::Up, Message::ButtonReleased(sample.button, at));
    }

    pub fn on_click(&mut self, sample: PointerSample, surface: Option<SurfaceRect>) {
        let Some(rect) = surface else { return };
        let at = relative_point(sample.client, rect);
        self.note(PointerEventKind::Click, Message::Click(at));
    }

    pub fn on_double_click(&mut self, sample: PointerSample, surface: Option<SurfaceRect>) {
        let Some(rect) = surface else { return };
        let at = relative_point(sample.client, rect);
        self.note(PointerEventKind::DoubleClick, Message::DoubleClick(at));
    }

    pub fn on_context_menu(&mut self, sample: PointerSample, surface: Option<SurfaceRect>) {
        let Some(rect) = surface else { return };
        let at = relative_point(sample.client, rect);
        self.note(PointerEventKind::ContextMenu, Message::ContextMenu(at));
    }

    /// A press that came from Enter or Space on the focused region rather than a pointer.
    pub fn on_keyboard_press(&mut self) {
        self.note(PointerEventKind::Click, Message::KeyboardActivation);
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        // -0.0 prints as "-0"
        let delta_y = delta_y + 0.0;
        let direction = WheelDirection::from_delta(delta_y);
        self.note(PointerEventKind::Wheel, Message::Wheel(direction, delta_y));
    }

    /// Resets the log and the drag state. The clear is itself logged.
    pub fn clear(&mut self) {
        self.dragging = false;
        let details = self.locale.message(Message::MouseLogCleared);
        self.log.clear(details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualClock, EFFECT_LIFETIME, SYSTEM_EVENT};
    use std::rc::Rc;

    const SURFACE: SurfaceRect = SurfaceRect::new(100.0, 50.0);

    fn capture() -> (Rc<ManualClock>, PointerCapture) {
        let clock = ManualClock::shared();
        let capture = PointerCapture::new(clock.clone(), Locale::English);
        (clock, capture)
    }

    fn at(x: f64, y: f64, button: PointerButton) -> PointerSample {
        PointerSample::new(Point::new(x, y), button)
    }

    fn latest(capture: &PointerCapture) -> (String, String) {
        let record = capture.log().latest().unwrap();
        (record.event_name.clone(), record.details.clone())
    }

    #[test]
    fn only_context_menu_and_wheel_are_suppressed() {
        use PointerEventKind::*;
        for kind in [Move, Enter, Leave, Down, Up, Click, DoubleClick] {
            assert_eq!(kind.default_action(), DefaultAction::Allow, "{kind:?}");
        }
        assert!(ContextMenu.default_action().is_suppressed());
        assert!(Wheel.default_action().is_suppressed());
    }

    #[test]
    fn dom_button_numbers() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Left);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Middle);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Right);
        assert_eq!(PointerButton::from_dom(3), PointerButton::Unknown);
        assert_eq!(PointerButton::from_dom(-1), PointerButton::Unknown);
    }

    #[test]
    fn moving_tracks_position_but_only_logs_while_dragging() {
        let (_, mut capture) = capture();
        capture.on_move(at(130.0, 80.0, PointerButton::Unknown), Some(SURFACE));
        assert_eq!(capture.position(), Point::new(30.0, 30.0));
        assert!(capture.log().is_empty());

        capture.on_down(at(130.0, 80.0, PointerButton::Left), Some(SURFACE));
        capture.on_move(at(140.0, 90.0, PointerButton::Unknown), Some(SURFACE));
        assert_eq!(
            latest(&capture),
            ("mousemove".into(), "- Dragging at (40, 40)".into())
        );

        capture.on_up(at(140.0, 90.0, PointerButton::Left), Some(SURFACE));
        let before = capture.log().count();
        capture.on_move(at(150.0, 90.0, PointerButton::Unknown), Some(SURFACE));
        assert_eq!(capture.log().count(), before);
    }

    #[test]
    fn press_spawns_a_centered_marker_and_names_the_button() {
        let (_, mut capture) = capture();
        let effect = capture
            .on_down(at(160.0, 70.0, PointerButton::Right), Some(SURFACE))
            .unwrap();

        assert!(capture.is_dragging());
        let marker = capture.effects().active().next().copied().unwrap();
        assert_eq!(marker.id, effect);
        assert_eq!((marker.x, marker.y), (50.0, 10.0));
        assert_eq!(
            latest(&capture),
            ("mousedown".into(), "- Right button pressed at (60, 20)".into())
        );
    }

    #[test]
    fn markers_expire_on_sweep() {
        let (clock, mut capture) = capture();
        let id = capture
            .on_down(at(110.0, 60.0, PointerButton::Left), Some(SURFACE))
            .unwrap();
        assert!(capture.effects().contains(id));

        clock.advance(EFFECT_LIFETIME);
        capture.effects_mut().sweep();
        assert!(!capture.effects().contains(id));
    }

    #[test]
    fn release_and_leave_end_the_drag() {
        let (_, mut capture) = capture();
        capture.on_down(at(110.0, 60.0, PointerButton::Left), Some(SURFACE));
        capture.on_up(at(110.0, 60.0, PointerButton::Left), Some(SURFACE));
        assert!(!capture.is_dragging());
        assert_eq!(
            latest(&capture),
            ("mouseup".into(), "- Left button released at (10, 10)".into())
        );

        capture.on_down(at(110.0, 60.0, PointerButton::Left), Some(SURFACE));
        capture.on_leave();
        assert!(!capture.is_dragging());
        assert_eq!(latest(&capture).0, "mouseleave");
    }

    #[test]
    fn unmounted_surface_skips_coordinate_events() {
        let (_, mut capture) = capture();
        let sample = at(10.0, 10.0, PointerButton::Left);

        capture.on_move(sample, None);
        capture.on_click(sample, None);
        capture.on_double_click(sample, None);
        capture.on_up(sample, None);
        capture.on_context_menu(sample, None);
        assert_eq!(capture.on_down(sample, None), None);

        assert!(capture.log().is_empty());
        assert!(capture.effects().is_empty());
        // the drag flag is still set by the press
        assert!(capture.is_dragging());
    }

    #[test]
    fn clicks_log_coordinates_only() {
        let (_, mut capture) = capture();
        capture.on_click(at(105.0, 55.0, PointerButton::Middle), Some(SURFACE));
        assert_eq!(latest(&capture), ("click".into(), "- Click at (5, 5)".into()));

        capture.on_double_click(at(105.0, 55.0, PointerButton::Left), Some(SURFACE));
        assert_eq!(
            latest(&capture),
            ("dblclick".into(), "- Double click at (5, 5)".into())
        );

        capture.on_context_menu(at(105.0, 55.0, PointerButton::Right), Some(SURFACE));
        assert_eq!(
            latest(&capture),
            ("contextmenu".into(), "- Context menu at (5, 5)".into())
        );
    }

    #[test]
    fn wheel_direction_follows_the_delta_sign() {
        let (_, mut capture) = capture();
        for (delta, expected) in [
            (120.0, "- Scrolled down (120)"),
            (-50.0, "- Scrolled up (-50)"),
            (0.0, "- Scrolled up (0)"),
            (-0.0, "- Scrolled up (0)"),
        ] {
            capture.on_wheel(delta);
            assert_eq!(latest(&capture), ("wheel".into(), expected.into()));
        }
    }

    #[test]
    fn keyboard_activation_logs_a_click() {
        let (_, mut capture) = capture();
        capture.on_keyboard_press();
        assert_eq!(
            latest(&capture),
            ("click".into(), "- Activated from the keyboard".into())
        );
    }

    #[test]
    fn three_presses_then_clear() {
        let (_, mut capture) = capture();
        for x in [110.0, 120.0, 130.0] {
            capture.on_down(at(x, 60.0, PointerButton::Left), Some(SURFACE));
        }
        assert_eq!(capture.log().count(), 3);

        capture.clear();

        assert_eq!(capture.log().count(), 1);
        assert_eq!(capture.log().len(), 1);
        assert!(!capture.is_dragging());
        assert_eq!(
            latest(&capture),
            (SYSTEM_EVENT.into(), "- Mouse log cleared".into())
        );
    }

    #[test]
    fn records_follow_the_capture_locale() {
        let mut capture = PointerCapture::new(ManualClock::shared(), Locale::Portuguese);
        capture.on_wheel(3.0);
        assert_eq!(latest(&capture).1, "- Scroll para baixo (3)");
    }
}
