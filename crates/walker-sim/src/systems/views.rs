//! Sorted traveller views for targeting and snapshots.
//!
//! The base collection enumerates travellers in insertion-id order; the two
//! targeting orders are produced with stable sorts on top, so equal keys
//! preserve insertion order.

use hecs::World;

use walker_core::components::{PathFollower, Position, Trail, Traveller};
use walker_core::state::TravellerView;
use walker_path::Path;

/// Build the id-ordered traveller view list from the world.
pub fn collect(world: &World, paths: &[Path]) -> Vec<TravellerView> {
    let mut views: Vec<TravellerView> = world
        .query::<(&Traveller, &PathFollower, &Position, Option<&Trail>)>()
        .iter()
        .map(|(_, (traveller, follower, position, trail))| TravellerView {
            id: traveller.id,
            kind: traveller.kind,
            position: position.0,
            layer: follower
                .path
                .and_then(|path| paths.get(path))
                .and_then(|path| path.segment(follower.segment))
                .map(|segment| segment.layer()),
            health: traveller.health,
            max_health: traveller.max_health,
            radius: traveller.radius,
            path_total_distance: follower.path_total_distance,
            trail: trail.map(|t| t.positions.clone()).unwrap_or_default(),
        })
        .collect();

    views.sort_by_key(|view| view.id);
    views
}

/// Rebuild both targeting views: progress-descending (for first/last) and
/// strength-descending with progress tie-break (for strongest).
pub fn rebuild(
    world: &World,
    paths: &[Path],
    by_distance: &mut Vec<TravellerView>,
    by_strength: &mut Vec<TravellerView>,
) {
    *by_distance = collect(world, paths);
    by_distance.sort_by(|a, b| b.path_total_distance.total_cmp(&a.path_total_distance));

    *by_strength = by_distance.clone();
    by_strength.sort_by(|a, b| {
        b.max_health
            .total_cmp(&a.max_health)
            .then(b.path_total_distance.total_cmp(&a.path_total_distance))
    });
}
