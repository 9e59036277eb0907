mod app;
mod event_log;
mod keyboard_panel;
mod mouse_panel;
mod region;

pub use app::App;
pub use event_log::{CaptureCounter, ClearButton, EffectMarker, EventLogView, LogTone};
pub use keyboard_panel::KeyboardPanel;
pub use mouse_panel::MousePanel;
pub use region::{Press, PressableRegion, RegionHost};
