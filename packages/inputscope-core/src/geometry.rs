use std::fmt;

/// A position in CSS pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The top-left corner of a capture surface in client coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

impl SurfaceRect {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Converts a client-space point into whole pixels relative to `rect`'s top-left corner.
///
/// Halves round toward positive infinity, so `-2.5` becomes `-2`.
pub fn relative_point(client: Point, rect: SurfaceRect) -> Point {
    Point {
        x: round_half_up(client.x - rect.left),
        y: round_half_up(client.y - rect.top),
    }
}

// never yields -0.0: anything that floors to zero started at +0.0 or above
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
