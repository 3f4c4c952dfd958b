//! Level-data record types: the on-disk JSON shape and the save format.
//!
//! Loading, validation, and geometry construction live in the path crate;
//! these records are shared vocabulary (loader input, save-event payload,
//! debug path views).

use serde::{Deserialize, Serialize};

use crate::enums::SegmentKind;

/// One path segment as serialized in level files and path saves.
/// `points` holds 2 entries for a line, 4 for a bezier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// Background layer this segment renders between.
    pub layer: u8,
    pub points: Vec<[f64; 2]>,
}

/// One path: an ordered list of segment records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub path: Vec<SegmentRecord>,
}

/// A level file: ordered, sparse background layers plus paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Layer image filenames by slot; `null` slots are permitted.
    pub layers: Vec<Option<String>>,
    pub paths: Vec<PathRecord>,
}
