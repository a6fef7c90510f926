pub mod command;
pub mod css;
pub mod limits;
pub mod model;
pub mod presets;
pub mod zoom;
mod json;

pub use command::{Command, Notice};
pub use css::CssError;
pub use json::SnapshotError;
pub use model::{Point, Pointer, Rect};
pub use presets::Preset;
pub use zoom::Zoom;

use log::{debug, trace, warn};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EditError {
    #[error("Minimum {} points required!", limits::MIN_POINTS)]
    MinimumPoints,
    #[error("point index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("invalid point {0}: coordinates must be within 0..100")]
    InvalidPoint(usize),
    #[error(transparent)]
    Css(#[from] CssError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

fn check_shape(points: &[Point]) -> Result<(), EditError> {
    if points.len() < limits::MIN_POINTS {
        return Err(EditError::MinimumPoints);
    }
    match points.iter().position(|p| !p.is_valid()) {
        Some(i) => Err(EditError::InvalidPoint(i)),
        None => Ok(()),
    }
}

/// Point-editing state for a single clip-path polygon.
///
/// Every mutation bumps [`ShapeEditor::version`]; the UI redraws handles and
/// CSS output when the version changes.
#[derive(Clone, Debug)]
pub struct ShapeEditor {
    pub(crate) points: Vec<Point>,
    pub(crate) active: Option<usize>,   // last interacted point
    pub(crate) dragging: Option<usize>, // point under the pointer
    pub(crate) version: u64,
}

impl Default for ShapeEditor {
    fn default() -> Self { ShapeEditor::new() }
}

impl ShapeEditor {
    /// Editor holding the default preset.
    pub fn new() -> ShapeEditor {
        ShapeEditor {
            points: presets::default_preset().points.to_vec(),
            active: None,
            dragging: None,
            version: 1,
        }
    }

    /// Editor holding a copy of `points`, starting at version 1.
    pub fn with_points(points: &[Point]) -> Result<ShapeEditor, EditError> {
        check_shape(points)?;
        Ok(ShapeEditor {
            points: points.to_vec(),
            active: None,
            dragging: None,
            version: 1,
        })
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn active_index(&self) -> Option<usize> { self.active }
    pub fn dragging_index(&self) -> Option<usize> { self.dragging }
    /// Presentation state: suppress text selection while true.
    pub fn is_dragging(&self) -> bool { self.dragging.is_some() }
    /// Monotonic state version; increments on every mutation.
    pub fn version(&self) -> u64 { self.version }

    fn touch(&mut self) { self.version = self.version.wrapping_add(1); }

    /// Insert a point at the center, right after the active point when there
    /// is one that is not last; append otherwise. Returns the new index.
    pub fn add_point(&mut self) -> usize {
        let index = match self.active {
            Some(a) if a + 1 < self.points.len() => a + 1,
            _ => self.points.len(),
        };
        self.points.insert(index, limits::NEW_POINT);
        if let Some(d) = self.dragging {
            if d >= index {
                self.dragging = Some(d + 1);
            }
        }
        self.active = Some(index);
        self.touch();
        debug!("added point {} ({} total)", index, self.points.len());
        index
    }

    /// Remove the point at `index`. Refused while the shape is at its minimum
    /// size; the shape and version are untouched on error.
    pub fn remove_point(&mut self, index: usize) -> Result<Point, EditError> {
        let len = self.points.len();
        if len <= limits::MIN_POINTS {
            warn!("refusing to remove point {}: shape has {} points", index, len);
            return Err(EditError::MinimumPoints);
        }
        if index >= len {
            return Err(EditError::IndexOutOfRange { index, len });
        }
        let removed = self.points.remove(index);
        self.dragging = match self.dragging {
            Some(d) if d == index => None,
            Some(d) if d > index => Some(d - 1),
            other => other,
        };
        self.active = None;
        self.touch();
        debug!("removed point {} ({} left)", index, self.points.len());
        Ok(removed)
    }

    /// Remove the active point, or the last point when nothing is active.
    /// Returns the index that was removed.
    pub fn remove_active_point(&mut self) -> Result<usize, EditError> {
        let index = match self.active {
            Some(a) => a,
            None => self.points.len().saturating_sub(1),
        };
        self.remove_point(index).map(|_| index)
    }

    /// Start dragging `index`; an in-progress drag is replaced. Returns false
    /// for an index with no handle.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.dragging = Some(index);
        self.active = Some(index);
        self.touch();
        true
    }

    /// Move the dragged point under the pointer, clamped to the surface.
    /// Returns the stored point, or `None` when nothing is being dragged or
    /// the input cannot be mapped (degenerate rect, non-finite pointer).
    pub fn update_drag(&mut self, pointer: Pointer, rect: Rect) -> Option<Point> {
        let index = self.dragging?;
        if rect.is_degenerate() || !pointer.x.is_finite() || !pointer.y.is_finite() {
            return None;
        }
        let p = rect.to_percent(pointer);
        let slot = self.points.get_mut(index)?;
        *slot = p;
        self.touch();
        trace!("drag {} -> ({:.2}, {:.2})", index, p.x, p.y);
        Some(p)
    }

    /// Finish any drag. Returns whether one was in progress.
    pub fn end_drag(&mut self) -> bool {
        if self.dragging.take().is_some() {
            self.touch();
            true
        } else {
            false
        }
    }

    /// Replace the shape with a copy of `points`.
    pub fn select_preset(&mut self, points: &[Point]) -> Result<(), EditError> {
        check_shape(points)?;
        self.replace(points.to_vec(), None);
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: &Preset) -> Notice {
        self.replace(preset.points.to_vec(), None);
        debug!("applied preset {}", preset.name);
        Notice::PresetApplied { name: preset.name.to_string() }
    }

    pub fn apply_preset_named(&mut self, name: &str) -> Result<Notice, EditError> {
        let preset = presets::find(name).ok_or_else(|| EditError::UnknownPreset(name.to_string()))?;
        Ok(self.apply_preset(preset))
    }

    /// Replace the shape from `polygon(...)` text.
    pub fn load_css(&mut self, text: &str) -> Result<(), EditError> {
        let points = css::parse_polygon(text)?;
        debug!("loaded {} points from css", points.len());
        self.replace(points, None);
        Ok(())
    }

    fn replace(&mut self, points: Vec<Point>, active: Option<usize>) {
        self.points = points;
        self.active = active;
        // A drag cannot survive a shape swap; its index may not exist anymore.
        self.dragging = None;
        self.touch();
    }

    pub fn to_css_polygon(&self) -> String { css::polygon(&self.points) }
    pub fn to_css_declaration(&self) -> String { css::declaration(&self.points) }
    pub fn to_css_block(&self) -> String { css::block(&self.points) }

    pub fn to_json_value(&self) -> serde_json::Value { json::to_json_impl(self) }

    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<(), EditError> {
        let (points, active) = json::from_json_impl(v)?;
        self.replace(points, active);
        Ok(())
    }

    /// Route a UI command to the matching operation.
    pub fn dispatch(&mut self, cmd: Command) -> Result<Option<Notice>, EditError> {
        match cmd {
            Command::BeginDrag { index } => {
                if self.begin_drag(index) {
                    Ok(None)
                } else {
                    Err(EditError::IndexOutOfRange { index, len: self.points.len() })
                }
            }
            Command::UpdateDrag { pointer, rect } => {
                self.update_drag(pointer, rect);
                Ok(None)
            }
            Command::EndDrag => {
                self.end_drag();
                Ok(None)
            }
            Command::RemovePoint { index } => {
                self.remove_point(index)?;
                Ok(Some(Notice::PointRemoved { index }))
            }
            Command::AddPoint => {
                let index = self.add_point();
                Ok(Some(Notice::PointAdded { index }))
            }
            Command::RemoveActivePoint => {
                let index = self.remove_active_point()?;
                Ok(Some(Notice::PointRemoved { index }))
            }
            Command::ApplyPreset { name } => self.apply_preset_named(&name).map(Some),
        }
    }
}
