//! Entity spawn factories and the centralized traveller removal path.
//!
//! All entity creation goes through these so id assignment and
//! cross-referential cleanup (tower target locks) stay in one place.

use glam::DVec2;
use hecs::World;

use walker_core::components::*;
use walker_core::constants::*;
use walker_core::enums::*;
use walker_core::stats::{bloon_spec, tower_spec};
use walker_core::types::{PathId, TowerId, TravellerId};
use walker_path::Path;

/// Spawn a bloon at its path's origin with catalog stats.
pub fn spawn_bloon(
    world: &mut World,
    paths: &[Path],
    tier: BloonTier,
    path: PathId,
    next_id: &mut TravellerId,
) -> TravellerId {
    let spec = bloon_spec(tier);
    let origin = paths
        .get(path)
        .and_then(|p| p.origin())
        .unwrap_or_default();
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Traveller {
            id,
            kind: TravellerKind::Bloon(tier),
            health: spec.health,
            max_health: spec.health,
            radius: spec.radius,
            damage: spec.damage,
            lifetime: TRAVELLER_LIFETIME,
            age: 0,
        },
        Position(origin),
        Motion::default(),
        PathFollower {
            path: Some(path),
            segment: 0,
            path_t: 0.0,
            path_total_t: 0.0,
            path_total_distance: 0.0,
            path_velocity: spec.speed,
            path_acceleration: 0.0,
        },
    ));
    id
}

/// Spawn a replacement bloon where its parent died, continuing from the
/// parent's path progress rather than the path start.
pub fn spawn_child_bloon(
    world: &mut World,
    tier: BloonTier,
    position: DVec2,
    parent: &PathFollower,
    next_id: &mut TravellerId,
) -> TravellerId {
    let spec = bloon_spec(tier);
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Traveller {
            id,
            kind: TravellerKind::Bloon(tier),
            health: spec.health,
            max_health: spec.health,
            radius: spec.radius,
            damage: spec.damage,
            lifetime: TRAVELLER_LIFETIME,
            age: 0,
        },
        Position(position),
        Motion::default(),
        PathFollower {
            path: parent.path,
            segment: parent.segment,
            path_t: parent.path_t,
            path_total_t: parent.path_total_t,
            path_total_distance: parent.path_total_distance,
            path_velocity: spec.speed,
            path_acceleration: 0.0,
        },
    ));
    id
}

/// Spawn a walker-kind traveller at its path's origin. Walkers are neutral
/// path-followers; they carry a trail and leak nothing.
pub fn spawn_walker(
    world: &mut World,
    paths: &[Path],
    path: PathId,
    speed: f64,
    next_id: &mut TravellerId,
) -> TravellerId {
    let origin = paths
        .get(path)
        .and_then(|p| p.origin())
        .unwrap_or_default();
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Traveller {
            id,
            kind: TravellerKind::Walker,
            health: 1.0,
            max_health: 1.0,
            radius: 10.0,
            damage: 0,
            lifetime: TRAVELLER_LIFETIME,
            age: 0,
        },
        Position(origin),
        Motion::default(),
        PathFollower {
            path: Some(path),
            segment: 0,
            path_t: 0.0,
            path_total_t: 0.0,
            path_total_distance: 0.0,
            path_velocity: speed,
            path_acceleration: 0.0,
        },
        Trail::default(),
    ));
    id
}

/// Spawn a tower of the given archetype with catalog stats.
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    position: DVec2,
    next_id: &mut TowerId,
) -> TowerId {
    let spec = tower_spec(kind);
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Position(position),
        Tower {
            id,
            kind,
            turret_length: spec.turret_length,
            turret_angle: 0.0,
            rounds_per_second: spec.rounds_per_second,
            rounds_per_shot: spec.rounds_per_shot,
            round_speed: spec.round_speed,
            round_damage: spec.round_damage,
            round_radius: spec.round_radius,
            round_spray: spec.round_spray,
            round_collats: spec.round_collats,
            round_kind: spec.round_kind,
            targetting_range: spec.targetting_range,
            targetting_mode: TargetingMode::default(),
            targetting_source: TargetingSource::default(),
            fire_pattern: spec.fire_pattern,
            target: None,
            last_fired_ms: None,
            upgrades: Vec::new(),
        },
    ));
    id
}

/// Spawn one projectile at the muzzle, inheriting the firing tower's round
/// stats. Range is the tower's targeting range.
pub fn spawn_pellet(world: &mut World, position: DVec2, velocity: DVec2, tower: &Tower) {
    world.spawn((
        Position(position),
        Motion {
            velocity,
            acceleration: DVec2::ZERO,
        },
        Particle {
            kind: tower.round_kind,
            damage: tower.round_damage,
            radius: tower.round_radius,
            collats: tower.round_collats,
            life: PARTICLE_LIFETIME,
            range: tower.targetting_range,
            travel_dist: 0.0,
            hitlist: Vec::new(),
        },
    ));
}

/// Spawn a stationary pop marker where a bloon died. Never collides; its
/// radius shrinks to zero over POP_LIFETIME ticks.
pub fn spawn_pop(world: &mut World, position: DVec2) {
    world.spawn((
        Position(position),
        Motion::default(),
        Particle {
            kind: ParticleKind::Pop,
            damage: 0.0,
            radius: POP_RADIUS,
            collats: 0,
            life: POP_LIFETIME,
            range: 0.0,
            travel_dist: 0.0,
            hitlist: Vec::new(),
        },
    ));
}

/// Remove a traveller and clear every tower target lock that refers to it.
pub fn remove_traveller(world: &mut World, entity: hecs::Entity, id: TravellerId) {
    let _ = world.despawn(entity);
    clear_target_locks(world, id);
}

/// Drop any tower lock pointing at the given traveller id.
pub fn clear_target_locks(world: &mut World, id: TravellerId) {
    for (_entity, tower) in world.query_mut::<&mut Tower>() {
        if tower.target.map(|lock| lock.traveller) == Some(id) {
            tower.target = None;
        }
    }
}
