//! Level file loading: parse the JSON document, validate segment records,
//! build runtime paths, and wait for declared layer images to land on disk.

use std::io;
use std::path::Path as FsPath;
use std::thread;
use std::time::Duration;

use glam::DVec2;
use walker_core::constants::{LAYER_RETRY_DELAY_MS, LAYER_RETRY_LIMIT, LEVEL_LAYER_MAX};
use walker_core::enums::SegmentKind;
use walker_core::level::{LevelData, PathRecord, SegmentRecord};

use crate::path::Path;
use crate::segment::PathSegment;

/// Retry policy for layer images that have not been written out yet. Level
/// art is exported separately from the level data, so a freshly saved level
/// may briefly name images that do not exist.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub layer_retries: u32,
    pub retry_delay: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            layer_retries: LAYER_RETRY_LIMIT,
            retry_delay: Duration::from_millis(LAYER_RETRY_DELAY_MS),
        }
    }
}

/// A fully loaded level: the raw records plus the paths built from them.
#[derive(Debug)]
pub struct LoadedLevel {
    pub data: LevelData,
    pub paths: Vec<Path>,
}

/// Parses level JSON and checks the layer slot count.
pub fn parse_level(text: &str) -> io::Result<LevelData> {
    let data: LevelData = serde_json::from_str(text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("level JSON: {e}")))?;
    if data.layers.len() > LEVEL_LAYER_MAX {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "level declares {} layer slots (maximum {})",
                data.layers.len(),
                LEVEL_LAYER_MAX
            ),
        ));
    }
    Ok(data)
}

fn invalid_segment(
    path_index: usize,
    segment_index: usize,
    kind: &str,
    expected: usize,
    got: usize,
) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("path {path_index} segment {segment_index}: {kind} needs {expected} points, got {got}"),
    )
}

/// Builds one segment from its record, validating the point count for the
/// declared kind.
pub fn build_segment(
    record: &SegmentRecord,
    path_index: usize,
    segment_index: usize,
) -> io::Result<PathSegment> {
    let points: Vec<DVec2> = record
        .points
        .iter()
        .map(|[x, y]| DVec2::new(*x, *y))
        .collect();
    match record.kind {
        SegmentKind::Line => {
            if points.len() != 2 {
                return Err(invalid_segment(path_index, segment_index, "line", 2, points.len()));
            }
            Ok(PathSegment::line(points[0], points[1], record.layer))
        }
        SegmentKind::Bezier => {
            if points.len() != 4 {
                return Err(invalid_segment(path_index, segment_index, "bezier", 4, points.len()));
            }
            Ok(PathSegment::bezier(
                [points[0], points[1], points[2], points[3]],
                record.layer,
            ))
        }
    }
}

/// Builds one runtime path from its record.
pub fn build_path(record: &PathRecord, path_index: usize) -> io::Result<Path> {
    let mut path = Path::new();
    for (segment_index, segment) in record.path.iter().enumerate() {
        path.add_segment(build_segment(segment, path_index, segment_index)?);
    }
    Ok(path)
}

/// Builds every path declared by the level, in declaration order.
pub fn build_paths(data: &LevelData) -> io::Result<Vec<Path>> {
    let mut paths = Vec::with_capacity(data.paths.len());
    for (path_index, record) in data.paths.iter().enumerate() {
        paths.push(build_path(record, path_index)?);
    }
    Ok(paths)
}

/// Waits for every declared layer image to appear beside the level file.
///
/// The retry budget is shared across all layers: each round re-checks
/// whatever is still missing, then sleeps once.
pub fn verify_layers(dir: &FsPath, data: &LevelData, options: &LoadOptions) -> io::Result<()> {
    let mut waits = 0;
    loop {
        let missing: Vec<&str> = data
            .layers
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|name| !dir.join(name).exists())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        if waits >= options.layer_retries {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "layer images still missing after {} retries: {}",
                    waits,
                    missing.join(", ")
                ),
            ));
        }
        waits += 1;
        thread::sleep(options.retry_delay);
    }
}

/// Reads, parses, and validates a level, waiting for its layer images.
pub fn load_level(file: &FsPath, options: &LoadOptions) -> io::Result<LoadedLevel> {
    let text = std::fs::read_to_string(file)?;
    let data = parse_level(&text)?;
    let dir = file.parent().unwrap_or_else(|| FsPath::new("."));
    verify_layers(dir, &data, options)?;
    let paths = build_paths(&data)?;
    Ok(LoadedLevel { data, paths })
}

// --- Tests ---
