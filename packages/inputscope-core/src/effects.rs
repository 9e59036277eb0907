//! Short-lived click markers.
//!
//! Every marker carries its own expiry time. The app schedules one deferred removal per
//! marker, but a [`PointerEffects::sweep`] clears anything past its expiry no matter who
//! asks, so a marker never outlives its window just because the task that would have
//! removed it was dropped.

use crate::{Point, SharedClock};
use std::fmt;
use std::time::Duration;
use web_time::Instant;

/// How long a marker stays on screen.
pub const EFFECT_LIFETIME: Duration = Duration::from_millis(600);

/// Markers are 20px wide; shifting by half centers them on the pointer.
pub const EFFECT_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(u64);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A marker's top-left corner, relative to the capture surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEffect {
    pub id: EffectId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug)]
struct Entry {
    effect: PointerEffect,
    expires_at: Instant,
}

pub struct PointerEffects {
    entries: Vec<Entry>,
    next_id: u64,
    clock: SharedClock,
}

impl PointerEffects {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            clock,
        }
    }

    /// Adds a marker centered on `at` that expires [`EFFECT_LIFETIME`] from now.
    pub fn spawn(&mut self, at: Point) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;

        self.entries.push(Entry {
            effect: PointerEffect {
                id,
                x: at.x - EFFECT_OFFSET,
                y: at.y - EFFECT_OFFSET,
            },
            expires_at: self.clock.now() + EFFECT_LIFETIME,
        });
        id
    }

    /// Removes a marker. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: EffectId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.effect.id != id);
        self.entries.len() != before
    }

    /// Drops every marker whose lifetime has elapsed, returning how many went.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|entry| entry.expires_at > now);
        before - self.entries.len()
    }

    /// Markers in creation order.
    pub fn active(&self) -> impl ExactSizeIterator<Item = &PointerEffect> {
        self.entries.iter().map(|entry| &entry.effect)
    }

    pub fn contains(&self, id: EffectId) -> bool {
        self.entries.iter().any(|entry| entry.effect.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PointerEffects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerEffects")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use std::rc::Rc;

    fn effects() -> (Rc<ManualClock>, PointerEffects) {
        let clock = ManualClock::shared();
        let effects = PointerEffects::new(clock.clone());
        (clock, effects)
    }

    #[test]
    fn spawn_centers_the_marker_on_the_pointer() {
        let (_, mut effects) = effects();
        for (cx, cy) in [(0.0, 0.0), (35.0, 120.0), (7.0, 3.0)] {
            let id = effects.spawn(Point::new(cx, cy));
            let effect = effects.active().find(|e| e.id == id).copied().unwrap();
            assert_eq!((effect.x, effect.y), (cx - 10.0, cy - 10.0));
        }
    }

    #[test]
    fn markers_expire_after_their_lifetime() {
        let (clock, mut effects) = effects();
        let id = effects.spawn(Point::new(50.0, 50.0));
        assert!(effects.contains(id));

        clock.advance(EFFECT_LIFETIME - Duration::from_millis(1));
        assert_eq!(effects.sweep(), 0);
        assert!(effects.contains(id));

        clock.advance(Duration::from_millis(1));
        assert_eq!(effects.sweep(), 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn sweep_only_takes_expired_markers() {
        let (clock, mut effects) = effects();
        let old = effects.spawn(Point::new(1.0, 1.0));
        clock.advance(Duration::from_millis(400));
        let young = effects.spawn(Point::new(2.0, 2.0));
        clock.advance(Duration::from_millis(200));

        effects.sweep();
        assert!(!effects.contains(old));
        assert!(effects.contains(young));
    }

    #[test]
    fn removal_is_idempotent() {
        let (_, mut effects) = effects();
        let id = effects.spawn(Point::new(5.0, 5.0));
        assert!(effects.remove(id));
        assert!(!effects.remove(id));
        assert!(effects.is_empty());
    }
}
