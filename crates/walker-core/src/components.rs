//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{PathId, TowerId, TravellerId};

/// World position (px).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Derived per-tick motion. For path-followers these are position deltas
/// maintained by the traversal step; once off-path they drive free flight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Motion {
    /// Position delta applied last tick (px/tick).
    pub velocity: DVec2,
    /// Velocity delta applied last tick (px/tick²).
    pub acceleration: DVec2,
}

/// Path-following progress. `path == None` means departed/free-flying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    /// Index into the world's path table.
    pub path: Option<PathId>,
    /// Current segment within the path.
    pub segment: usize,
    /// In-segment parameter, [0,1) except transiently during carry-over.
    pub path_t: f64,
    /// Cumulative parameter traversed over the whole path.
    pub path_total_t: f64,
    /// Cumulative distance traversed (px).
    pub path_total_distance: f64,
    /// Desired travel distance per tick (px).
    pub path_velocity: f64,
    /// Per-tick change applied to `path_velocity` before stepping.
    pub path_acceleration: f64,
}

/// Core traveller identity and combat state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Traveller {
    /// World-assigned id, monotonic, never reused.
    pub id: TravellerId,
    pub kind: TravellerKind,
    pub health: f64,
    pub max_health: f64,
    /// Body radius for projectile collision (px).
    pub radius: f64,
    /// Lives subtracted if this traveller leaks off the path end.
    pub damage: u32,
    /// Lifetime budget in ticks.
    pub lifetime: u32,
    /// Ticks lived so far.
    pub age: u32,
}

/// Recent-position history for trail rendering (walker kind only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    /// Recent positions, oldest first, capped at TRAIL_MAX_POINTS.
    pub positions: Vec<DVec2>,
}

/// A lock on a traveller target with cached geometry from the last
/// tracking tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetLock {
    pub traveller: TravellerId,
    /// Distance to the aim point at lock update (px).
    pub distance: f64,
    /// Angle to the aim point at lock update (radians).
    pub angle: f64,
}

/// Tower state: static emplacement stats plus the live firing state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    /// World-assigned id, monotonic.
    pub id: TowerId,
    pub kind: TowerKind,
    /// Muzzle offset from the tower center along the emission angle (px).
    pub turret_length: f64,
    /// Current turret facing (radians).
    pub turret_angle: f64,
    /// Fire-rate budget: one firing per `1000/rounds_per_second` ms.
    pub rounds_per_second: f64,
    /// Projectiles emitted per firing.
    pub rounds_per_shot: u32,
    /// Initial projectile speed (px/tick).
    pub round_speed: f64,
    pub round_damage: f64,
    /// Projectile collision radius (px).
    pub round_radius: f64,
    /// Random angular jitter applied per emitted round (radians, full width).
    pub round_spray: f64,
    /// Penetration budget handed to each projectile.
    pub round_collats: u32,
    pub round_kind: ParticleKind,
    /// Acquisition and projectile travel range (px).
    pub targetting_range: f64,
    pub targetting_mode: TargetingMode,
    pub targetting_source: TargetingSource,
    pub fire_pattern: FirePattern,
    /// Current target, if any. Must refer to a live traveller; cleared by
    /// the world's traveller-removal path.
    pub target: Option<TargetLock>,
    /// Simulation time of the last gate opening (ms), None before first.
    pub last_fired_ms: Option<f64>,
    /// Upgrades applied so far, in application order.
    pub upgrades: Vec<UpgradeId>,
}

/// Short-lived projectile or visual-effect particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub damage: f64,
    /// Collision radius (px); pops shrink this over their life.
    pub radius: f64,
    /// Remaining extra hits before the particle is retired.
    pub collats: u32,
    /// Remaining lifetime in ticks.
    pub life: i32,
    /// Retired once traveled distance exceeds this (px).
    pub range: f64,
    /// Distance traveled so far (px).
    pub travel_dist: f64,
    /// Travellers already hit by this particle (never re-hit).
    pub hitlist: Vec<TravellerId>,
}
