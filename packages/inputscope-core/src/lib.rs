#![doc = include_str!("../README.md")]

mod clock;
mod effects;
mod error;
mod geometry;
mod keyboard;
mod locale;
mod log;
mod pointer;
mod theme;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use effects::{EffectId, PointerEffect, PointerEffects, EFFECT_LIFETIME, EFFECT_OFFSET};
pub use error::{ExportError, HostError, ParseThemeError};
pub use geometry::{relative_point, Point, SurfaceRect};
pub use keyboard::{GlobalShortcut, KeyModifiers, KeySample, KeyboardCapture};
pub use locale::{Label, Locale, Message};
pub use log::{EventLog, EventRecord, RecordId, LOG_CAPACITY, SYSTEM_EVENT};
pub use pointer::{
    DefaultAction, PointerButton, PointerCapture, PointerEventKind, PointerSample, WheelDirection,
};
pub use theme::{
    MemoryThemeHost, Theme, ThemeHost, ThemePreference, DARK_CLASS, THEME_STORAGE_KEY,
};
