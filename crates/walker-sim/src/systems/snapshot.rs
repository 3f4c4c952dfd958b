//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! Building a snapshot never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use walker_core::components::{Particle, Position, Tower, Traveller};
use walker_core::enums::{GameMode, GamePhase};
use walker_core::state::*;
use walker_core::types::SimTime;
use walker_path::Path;

use crate::systems::views;

/// Build a complete FrameSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    mode: GameMode,
    lives: u32,
    round: u32,
    paths: &[Path],
    hovered_segment: Option<HoveredSegment>,
    debug: bool,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        mode,
        lives,
        round,
        travellers: views::collect(world, paths),
        towers: build_towers(world),
        particles: build_particles(world),
        paths: if debug {
            build_path_outlines(paths)
        } else {
            Vec::new()
        },
        hovered_segment,
        counters: build_counters(world),
    }
}

/// Build TowerView list, sorted by tower id.
fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Position, &Tower)>()
        .iter()
        .map(|(_, (position, tower))| TowerView {
            id: tower.id,
            kind: tower.kind,
            position: position.0,
            turret_angle: tower.turret_angle,
            turret_length: tower.turret_length,
            range: tower.targetting_range,
            targetting_mode: tower.targetting_mode,
            target: tower.target.map(|lock| lock.traveller),
            upgrades: tower.upgrades.clone(),
        })
        .collect();

    towers.sort_by_key(|tower| tower.id);
    towers
}

/// Build ParticleView list in world iteration order.
fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (position, particle))| ParticleView {
            kind: particle.kind,
            position: position.0,
            radius: particle.radius,
        })
        .collect()
}

/// Path outlines as save records, for debug drawing.
fn build_path_outlines(paths: &[Path]) -> Vec<PathOutlineView> {
    paths
        .iter()
        .enumerate()
        .map(|(path_id, path)| PathOutlineView {
            path: path_id,
            segments: path.to_records(),
        })
        .collect()
}

/// Observational entity counters.
fn build_counters(world: &World) -> BTreeMap<String, f64> {
    let travellers = world.query::<&Traveller>().iter().count();
    let particles = world.query::<&Particle>().iter().count();

    let mut counters = BTreeMap::new();
    counters.insert("travellers".to_string(), travellers as f64);
    counters.insert("particles".to_string(), particles as f64);
    counters
}
