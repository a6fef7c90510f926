use crate::limits;
use crate::model::Point;
use crate::ShapeEditor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(String),
    #[error("unsupported snapshot version {0}")]
    Version(u32),
    #[error("snapshot has {0} points, expected {min}..={max}", min = limits::MIN_POINTS, max = limits::MAX_POINTS)]
    PointCount(usize),
    #[error("point {0} is outside 0..100")]
    PointRange(usize),
    #[error("active index {0} out of range")]
    Active(usize),
}

#[derive(Serialize, Deserialize)]
struct Doc {
    version: u32,
    points: Vec<Point>,
    #[serde(default)]
    active: Option<usize>,
}

pub fn to_json_impl(ed: &ShapeEditor) -> Value {
    let doc = Doc {
        version: FORMAT_VERSION,
        points: ed.points.clone(),
        active: ed.active,
    };
    serde_json::to_value(&doc).unwrap_or(Value::Null)
}

/// Validate a snapshot without touching the editor; returns the points and active index.
pub fn from_json_impl(v: Value) -> Result<(Vec<Point>, Option<usize>), SnapshotError> {
    let doc: Doc = serde_json::from_value(v).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
    if doc.version != FORMAT_VERSION {
        return Err(SnapshotError::Version(doc.version));
    }
    let n = doc.points.len();
    if !(limits::MIN_POINTS..=limits::MAX_POINTS).contains(&n) {
        return Err(SnapshotError::PointCount(n));
    }
    if let Some(i) = doc.points.iter().position(|p| !p.is_valid()) {
        return Err(SnapshotError::PointRange(i));
    }
    if let Some(a) = doc.active {
        if a >= n {
            return Err(SnapshotError::Active(a));
        }
    }
    Ok((doc.points, doc.active))
}
