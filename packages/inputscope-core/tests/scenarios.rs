//! End-to-end sessions against the public API.

use inputscope_core::*;
use std::rc::Rc;
use std::time::Duration;

const SURFACE: SurfaceRect = SurfaceRect::new(20.0, 20.0);

fn sample(x: f64, y: f64, button: PointerButton) -> PointerSample {
    PointerSample::new(Point::new(x, y), button)
}

#[test]
fn drag_session() {
    let clock = ManualClock::shared();
    let mut pointer = PointerCapture::new(clock.clone(), Locale::English);

    pointer.on_enter();
    pointer.on_move(sample(40.0, 40.0, PointerButton::Unknown), Some(SURFACE));
    let effect = pointer
        .on_down(sample(40.0, 40.0, PointerButton::Left), Some(SURFACE))
        .expect("surface is mounted");
    for step in 1..=3 {
        let x = 40.0 + f64::from(step) * 10.0;
        pointer.on_move(sample(x, 40.0, PointerButton::Unknown), Some(SURFACE));
    }
    pointer.on_up(sample(70.0, 40.0, PointerButton::Left), Some(SURFACE));
    pointer.on_click(sample(70.0, 40.0, PointerButton::Left), Some(SURFACE));
    pointer.on_leave();

    let names: Vec<&str> = pointer
        .log()
        .records()
        .rev()
        .map(|r| r.event_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "mouseenter",
            "mousedown",
            "mousemove",
            "mousemove",
            "mousemove",
            "mouseup",
            "click",
            "mouseleave"
        ]
    );
    assert_eq!(pointer.position(), Point::new(50.0, 20.0));

    assert!(pointer.effects().contains(effect));
    clock.advance(EFFECT_LIFETIME + Duration::from_millis(5));
    pointer.effects_mut().sweep();
    assert!(pointer.effects().is_empty());
}

#[test]
fn long_sessions_keep_the_newest_fifty() {
    let mut keyboard = KeyboardCapture::new(ManualClock::shared(), Locale::English);
    for i in 0..75 {
        keyboard.on_input(format!("{i}"));
    }

    assert_eq!(keyboard.log().len(), LOG_CAPACITY);
    assert_eq!(keyboard.log().count(), 75);
    assert_eq!(
        keyboard.log().latest().unwrap().details,
        "- Content changed: \"74\""
    );
    assert_eq!(
        keyboard.log().records().last().unwrap().details,
        "- Content changed: \"25\""
    );
}

#[test]
fn portuguese_session() {
    let mut keyboard = KeyboardCapture::new(ManualClock::shared(), Locale::from_language_tag("pt-BR"));
    let ctrl = KeyModifiers {
        ctrl: true,
        ..KeyModifiers::NONE
    };
    keyboard.on_key_down(&KeySample::new("s", "KeyS", ctrl));
    if let Some(shortcut) = GlobalShortcut::classify("s", ctrl) {
        keyboard.on_global_shortcut(shortcut);
    }

    let details: Vec<&str> = keyboard.log().records().map(|r| r.details.as_str()).collect();
    assert_eq!(
        details,
        [
            "- Atalho Ctrl+S pressionado",
            "- Tecla \"s\" pressionada (código: KeyS) (Ctrl)"
        ]
    );
}

#[test]
fn theme_survives_a_reload() {
    let host = Rc::new(MemoryThemeHost::new().with_prefers_dark(false));

    let mut first = ThemePreference::read(host.clone());
    assert_eq!(first.theme(), Theme::Light);
    first.toggle();

    // a second page load reads what the first one saved
    let second = ThemePreference::read(host.clone());
    assert_eq!(second.theme(), Theme::Dark);
    second.sync();
    assert!(host.has_root_class(DARK_CLASS));
}
