// Viewport scale for the workspace. The editor itself works in percentages,
// so zoom only affects how rendered sizes are reported back to the user.

pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    level: f64,
}

impl Default for Zoom {
    fn default() -> Self { Zoom { level: 1.0 } }
}

impl Zoom {
    pub fn new() -> Zoom { Zoom::default() }

    pub fn level(&self) -> f64 { self.level }

    /// Wheel scrolling down (positive delta) zooms out, anything else zooms in.
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        let step = if delta_y > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        self.set(self.level + step)
    }

    /// Non-finite levels are ignored.
    pub fn set(&mut self, level: f64) -> f64 {
        if level.is_finite() {
            self.level = level.clamp(MIN_ZOOM, MAX_ZOOM);
        }
        self.level
    }

    pub fn reset(&mut self) -> f64 { self.set(1.0) }

    /// e.g. `"120%"`
    pub fn label(&self) -> String {
        format!("{}%", (self.level * 100.0).round() as i64)
    }

    /// Unscaled size of an element rendered at the current level.
    pub fn base_size(&self, width: f64, height: f64) -> (f64, f64) {
        (width / self.level, height / self.level)
    }

    /// e.g. `"800 x 600"`
    pub fn dims_label(&self, width: f64, height: f64) -> String {
        let (w, h) = self.base_size(width, height);
        format!("{} x {}", w.round() as i64, h.round() as i64)
    }
}
