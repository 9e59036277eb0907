//! Time sources for timestamps and effect expiry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

/// A source of wall-clock and monotonic time.
///
/// Records carry a formatted time of day while effect expiry is measured against a
/// monotonic instant, so both live behind the same seam.
pub trait Clock {
    /// The local time of day, formatted as `HH:MM:SS`.
    fn wall_time(&self) -> String;

    /// A monotonic instant.
    fn now(&self) -> Instant;
}

/// Everything runs on the UI thread, so the clock is shared through an `Rc`.
pub type SharedClock = Rc<dyn Clock>;

/// The real clock. Works on wasm32 through chrono's `wasmbind` and `web-time`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> SharedClock {
        Rc::new(SystemClock)
    }
}

impl Clock for SystemClock {
    fn wall_time(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    wall: RefCell<String>,
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            wall: RefCell::new("00:00:00".to_string()),
            now: Cell::new(Instant::now()),
        }
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    pub fn set_wall_time(&self, wall: impl Into<String>) {
        *self.wall.borrow_mut() = wall.into();
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn wall_time(&self) -> String {
        self.wall.borrow().clone()
    }

    fn now(&self) -> Instant {
        self.now.get()
    }
}
