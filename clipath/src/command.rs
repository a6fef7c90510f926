use crate::model::{Pointer, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input events from the UI layer, decoded into editor operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Pointer-down on a handle.
    BeginDrag { index: usize },
    /// Pointer-move anywhere in the viewport.
    UpdateDrag { pointer: Pointer, rect: Rect },
    /// Pointer-up anywhere in the viewport.
    EndDrag,
    /// Double-click on a handle.
    RemovePoint { index: usize },
    AddPoint,
    RemoveActivePoint,
    ApplyPreset { name: String },
}

/// User-visible confirmation of a successful command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    PointAdded { index: usize },
    PointRemoved { index: usize },
    PresetApplied { name: String },
}

impl Notice {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PointAdded { .. } => f.write_str("New point added"),
            Notice::PointRemoved { .. } => f.write_str("Point removed"),
            Notice::PresetApplied { name } => write!(f, "{} shape applied", name),
        }
    }
}
