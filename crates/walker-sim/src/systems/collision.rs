//! Particle stepping and projectile-traveller collision resolution,
//! including the bloon split on death.
//!
//! Particles are processed one at a time so travellers spawned by an
//! earlier particle's split are visible to later particles in the same
//! tick. A killed traveller is removed inside the resolution call; the
//! scan has already selected its single hit, so no iteration observes
//! the mutation.

use glam::DVec2;
use hecs::{Entity, World};

use walker_core::components::{Motion, Particle, PathFollower, Position, Traveller};
use walker_core::constants::{POP_LIFETIME, POP_RADIUS};
use walker_core::enums::{ParticleKind, TravellerKind};
use walker_core::events::GameEvent;
use walker_core::stats::bloon_spec;
use walker_core::types::TravellerId;

use crate::world_setup;

/// Step every particle and resolve at most one hit per particle.
pub fn run(world: &mut World, next_traveller_id: &mut TravellerId, events: &mut Vec<GameEvent>) {
    let particles: Vec<Entity> = world
        .query::<&Particle>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in particles {
        step_particle(world, entity, next_traveller_id, events);
    }
}

fn step_particle(
    world: &mut World,
    entity: Entity,
    next_traveller_id: &mut TravellerId,
    events: &mut Vec<GameEvent>,
) {
    // Advance the particle and capture what the collision scan needs.
    let probe = match world.query_one_mut::<(&mut Particle, &mut Position, &Motion)>(entity) {
        Ok((particle, position, motion)) => {
            particle.life -= 1;
            if particle.kind == ParticleKind::Pop {
                // Pop markers shrink in place and never collide.
                particle.radius = POP_RADIUS * (particle.life.max(0) as f64 / POP_LIFETIME as f64);
                None
            } else {
                position.0 += motion.velocity;
                particle.travel_dist += motion.velocity.length();
                Some((
                    position.0,
                    particle.radius,
                    particle.damage,
                    particle.hitlist.clone(),
                ))
            }
        }
        Err(_) => return,
    };

    let (center, radius, damage, hitlist) = match probe {
        Some(probe) => probe,
        None => return,
    };

    let hit = find_colliding_traveller(world, center, radius, &hitlist);

    if let Some((victim, victim_id)) = hit {
        let mut hit_ids = vec![victim_id];
        if damage > 0.0 {
            hit_ids.extend(apply_damage(world, victim, victim_id, damage, next_traveller_id, events));
        }
        if let Ok(particle) = world.query_one_mut::<&mut Particle>(entity) {
            particle.hitlist.extend(hit_ids);
            if particle.collats == 0 {
                particle.life = 0;
            } else {
                particle.collats -= 1;
            }
        }
    }
}

/// First traveller, in insertion-id order, whose body overlaps the probe
/// point and is not on the exclusion list.
fn find_colliding_traveller(
    world: &World,
    center: DVec2,
    radius: f64,
    exclude: &[TravellerId],
) -> Option<(Entity, TravellerId)> {
    let mut candidates: Vec<(Entity, TravellerId, DVec2, f64)> = world
        .query::<(&Traveller, &Position)>()
        .iter()
        .filter(|(_, (traveller, _))| !exclude.contains(&traveller.id))
        .map(|(entity, (traveller, position))| {
            (entity, traveller.id, position.0, traveller.radius)
        })
        .collect();
    candidates.sort_by_key(|&(_, id, _, _)| id);

    candidates
        .iter()
        .find(|&&(_, _, position, body)| center.distance(position) < radius + body)
        .map(|&(entity, id, _, _)| (entity, id))
}

/// Subtract damage; on a bloon kill, spawn the replacement tier at the
/// parent's exact path progress, emit the pop, and remove the parent.
/// Returns the ids of any spawned children.
fn apply_damage(
    world: &mut World,
    victim: Entity,
    victim_id: TravellerId,
    damage: f64,
    next_traveller_id: &mut TravellerId,
    events: &mut Vec<GameEvent>,
) -> Vec<TravellerId> {
    let mut children = Vec::new();

    let killed = match world.query_one_mut::<(&mut Traveller, &Position, &PathFollower)>(victim) {
        Ok((traveller, position, follower)) => {
            traveller.health -= damage;
            if traveller.health <= 0.0 {
                Some((traveller.kind, position.0, follower.clone()))
            } else {
                None
            }
        }
        Err(_) => None,
    };

    if let Some((TravellerKind::Bloon(tier), position, follower)) = killed {
        if let Some((child_tier, count)) = bloon_spec(tier).next {
            for _ in 0..count {
                children.push(world_setup::spawn_child_bloon(
                    world,
                    child_tier,
                    position,
                    &follower,
                    next_traveller_id,
                ));
            }
        }
        events.push(GameEvent::BloonPopped {
            id: victim_id,
            tier,
        });
        world_setup::spawn_pop(world, position);
        world_setup::remove_traveller(world, victim, victim_id);
    }

    children
}
