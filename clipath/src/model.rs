use serde::{Deserialize, Serialize};

/// A polygon vertex as a percentage offset within the clipped surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Coordinates as they appear in CSS output.
    pub fn rounded(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }

    pub fn is_valid(self) -> bool {
        crate::limits::in_percent_bounds(self.x) && crate::limits::in_percent_bounds(self.y)
    }
}

/// Absolute pointer position in client space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// On-screen bounding box of the clipped surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect { left, top, width, height }
    }

    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    // Zero-sized or non-finite boxes cannot map a pointer to a percentage.
    pub fn is_degenerate(&self) -> bool {
        !(self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }

    /// Map a pointer to a clamped percentage point inside this box.
    pub fn to_percent(&self, p: Pointer) -> Point {
        use crate::limits::clamp_percent;
        let x = (p.x - self.left) / self.width * 100.0;
        let y = (p.y - self.top) / self.height * 100.0;
        Point { x: clamp_percent(x), y: clamp_percent(y) }
    }
}
