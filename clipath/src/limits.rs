// Shape bounds and ingestion caps for untrusted input (JSON/CSS)
use crate::model::Point;

pub const MIN_POINTS: usize = 3;
// Only applied to parsed/imported shapes; add_point is unbounded.
pub const MAX_POINTS: usize = 4_096;

// Cap on CSS text accepted by the parser
pub const MAX_CSS_LEN: usize = 256 * 1024;

pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;

// Where add_point places new points
pub const NEW_POINT: Point = Point::new(50.0, 50.0);

#[inline]
pub fn clamp_percent(v: f64) -> f64 { v.clamp(PERCENT_MIN, PERCENT_MAX) }

#[inline]
pub fn in_percent_bounds(v: f64) -> bool { v.is_finite() && v >= PERCENT_MIN && v <= PERCENT_MAX }
