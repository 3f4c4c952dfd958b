//! Removal passes: expired or dead travellers, leaked bloons, and spent
//! particles. Travellers are cleaned between traversal and view rebuild;
//! particles at the end of the tick.

use hecs::{Entity, World};

use walker_core::components::{Particle, PathFollower, Traveller};
use walker_core::events::GameEvent;
use walker_core::types::TravellerId;

use crate::world_setup;

/// Remove travellers that aged out or ran out of health, and resolve bloon
/// leaks: a bloon that departed its path subtracts its damage from lives
/// and is destroyed.
pub fn run_travellers(world: &mut World, lives: &mut u32, events: &mut Vec<GameEvent>) {
    let mut leaks: Vec<(Entity, TravellerId, u32)> = Vec::new();
    let mut removals: Vec<(Entity, TravellerId)> = Vec::new();

    for (entity, (traveller, follower)) in world.query::<(&Traveller, &PathFollower)>().iter() {
        if traveller.kind.is_bloon() && follower.path.is_none() && traveller.health > 0.0 {
            leaks.push((entity, traveller.id, traveller.damage));
        } else if traveller.age > traveller.lifetime || traveller.health <= 0.0 {
            removals.push((entity, traveller.id));
        }
    }

    leaks.sort_by_key(|&(_, id, _)| id);
    removals.sort_by_key(|&(_, id)| id);

    for (entity, id, damage) in leaks {
        *lives = lives.saturating_sub(damage);
        events.push(GameEvent::BloonLeaked {
            id,
            damage,
            lives_remaining: *lives,
        });
        world_setup::remove_traveller(world, entity, id);
    }
    for (entity, id) in removals {
        world_setup::remove_traveller(world, entity, id);
    }
}

/// Remove particles whose life expired or whose travel exceeded the range
/// cap. Uses the engine's pre-allocated buffer.
pub fn run_particles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.life <= 0 || particle.travel_dist > particle.range {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
