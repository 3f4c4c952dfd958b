//! Tower fire control: target acquisition over the sorted views, turret
//! aiming, the millisecond fire-rate gate, and volley emission.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use walker_core::commands::InputFrame;
use walker_core::components::{Position, TargetLock, Tower};
use walker_core::constants::{AIM_OFFSET, FULL_CIRCLE};
use walker_core::enums::{FirePattern, TargetingMode, TargetingSource};
use walker_core::events::GameEvent;
use walker_core::state::TravellerView;
use walker_core::types::SimTime;

use crate::world_setup;

/// Run fire control for one tick.
///
/// The gate is evaluated for every tower and opening it records the
/// timestamp even when there is nothing to shoot at, so an idle tower does
/// not bank shots; it fires at the first gate opening where it holds an
/// aim point.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    by_distance: &[TravellerView],
    by_strength: &[TravellerView],
    input: InputFrame,
    time: &SimTime,
    sticky: bool,
    events: &mut Vec<GameEvent>,
) {
    let now_ms = time.elapsed_ms();
    let mut volleys: Vec<(DVec2, Tower)> = Vec::new();

    for (_entity, (position, tower)) in world.query_mut::<(&Position, &mut Tower)>() {
        let origin = position.0;

        let has_aim = match tower.targetting_source {
            TargetingSource::Mouse => {
                tower.target = None;
                let offset = input.mouse - origin;
                tower.turret_angle = offset.y.atan2(offset.x);
                true
            }
            TargetingSource::Auto => {
                update_target(tower, origin, by_distance, by_strength, sticky);
                match tower.target {
                    Some(lock) => {
                        tower.turret_angle = lock.angle;
                        true
                    }
                    None => false,
                }
            }
        };

        let budget_ms = 1000.0 / tower.rounds_per_second;
        let gate_open = match tower.last_fired_ms {
            None => true,
            Some(last) => now_ms - last > budget_ms,
        };
        if gate_open {
            tower.last_fired_ms = Some(now_ms);
            if has_aim {
                volleys.push((origin, tower.clone()));
            }
        }
    }

    for (origin, tower) in volleys {
        emit_volley(world, rng, origin, &tower, events);
    }
}

/// Refresh a tower's target lock. With sticky targeting, a live in-range
/// target is kept (with refreshed geometry) instead of rescanned.
fn update_target(
    tower: &mut Tower,
    origin: DVec2,
    by_distance: &[TravellerView],
    by_strength: &[TravellerView],
    sticky: bool,
) {
    if sticky {
        if let Some(lock) = tower.target {
            if let Some(view) = by_distance.iter().find(|v| v.id == lock.traveller) {
                if let Some(refreshed) = lock_on(tower, origin, view) {
                    tower.target = Some(refreshed);
                    return;
                }
            }
            tower.target = None;
        }
    }
    tower.target = acquire(tower, origin, by_distance, by_strength);
}

/// Scan the mode's candidate order and lock the first traveller in range.
fn acquire(
    tower: &Tower,
    origin: DVec2,
    by_distance: &[TravellerView],
    by_strength: &[TravellerView],
) -> Option<TargetLock> {
    match tower.targetting_mode {
        TargetingMode::First => first_in_range(tower, origin, by_distance.iter()),
        TargetingMode::Last => first_in_range(tower, origin, by_distance.iter().rev()),
        TargetingMode::Strongest => first_in_range(tower, origin, by_strength.iter()),
    }
}

fn first_in_range<'a>(
    tower: &Tower,
    origin: DVec2,
    views: impl Iterator<Item = &'a TravellerView>,
) -> Option<TargetLock> {
    for view in views {
        if let Some(lock) = lock_on(tower, origin, view) {
            return Some(lock);
        }
    }
    None
}

/// Build a lock on a traveller if its aim point is within range. The aim
/// point is the traveller position displaced by AIM_OFFSET on both axes.
fn lock_on(tower: &Tower, origin: DVec2, view: &TravellerView) -> Option<TargetLock> {
    let aim = view.position + DVec2::splat(AIM_OFFSET);
    let offset = aim - origin;
    let distance = offset.length();
    if distance <= tower.targetting_range {
        Some(TargetLock {
            traveller: view.id,
            distance,
            angle: offset.y.atan2(offset.x),
        })
    } else {
        None
    }
}

/// Emit one volley of `rounds_per_shot` projectiles from the muzzle.
fn emit_volley(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: DVec2,
    tower: &Tower,
    events: &mut Vec<GameEvent>,
) {
    for round in 0..tower.rounds_per_shot {
        let base = match tower.fire_pattern {
            FirePattern::Forward => tower.turret_angle,
            FirePattern::Around => round as f64 * (FULL_CIRCLE / tower.rounds_per_shot as f64),
        };
        let angle = base + rng.gen_range(-0.5..0.5) * tower.round_spray;
        let direction = DVec2::new(angle.cos(), angle.sin());
        let muzzle = origin + direction * tower.turret_length;
        world_setup::spawn_pellet(world, muzzle, direction * tower.round_speed, tower);
    }
    events.push(GameEvent::TowerFired {
        tower: tower.id,
        rounds: tower.rounds_per_shot,
    });
}
