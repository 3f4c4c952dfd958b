//! Edit-mode hover query: which path segment is under the cursor.

use glam::DVec2;

use walker_core::constants::EDIT_HOVER_RADIUS;
use walker_core::state::HoveredSegment;
use walker_path::Path;

/// Find the first segment within hover radius of the mouse, scanning paths
/// and their segments in order.
pub fn run(paths: &[Path], mouse: DVec2) -> Option<HoveredSegment> {
    for (path_id, path) in paths.iter().enumerate() {
        if let Some(segment) = path.find_colliding_segment(mouse, EDIT_HOVER_RADIUS) {
            return Some(HoveredSegment {
                path: path_id,
                segment,
            });
        }
    }
    None
}
