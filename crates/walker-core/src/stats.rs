//! Stat catalogs for bloon tiers, tower archetypes, and upgrades.
//!
//! Consolidates the per-variant tuning records. Spawning code reads these
//! tables to produce fully-initialized entities; nothing here is mutable
//! shared state.

use serde::{Deserialize, Serialize};

use crate::components::Tower;
use crate::enums::{BloonTier, FirePattern, ParticleKind, TowerKind, UpgradeId};

/// Tuning record for one bloon tier.
#[derive(Debug, Clone, Copy)]
pub struct BloonSpec {
    pub health: f64,
    /// Path travel speed (px/tick).
    pub speed: f64,
    /// Lives lost if this bloon leaks off the path end.
    pub damage: u32,
    /// Body radius (px).
    pub radius: f64,
    /// Replacement spawn rule on death by damage: tier and count.
    pub next: Option<(BloonTier, u32)>,
}

/// Get the tuning record for a bloon tier.
pub fn bloon_spec(tier: BloonTier) -> BloonSpec {
    match tier {
        BloonTier::Red => BloonSpec {
            health: 1.0,
            speed: 1.0,
            damage: 1,
            radius: 12.0,
            next: None,
        },
        BloonTier::Blue => BloonSpec {
            health: 1.0,
            speed: 1.2,
            damage: 2,
            radius: 13.0,
            next: Some((BloonTier::Red, 1)),
        },
        BloonTier::Green => BloonSpec {
            health: 1.0,
            speed: 1.4,
            damage: 4,
            radius: 14.0,
            next: Some((BloonTier::Blue, 1)),
        },
        BloonTier::Yellow => BloonSpec {
            health: 1.0,
            speed: 1.6,
            damage: 5,
            radius: 15.0,
            next: Some((BloonTier::Green, 1)),
        },
        BloonTier::Pink => BloonSpec {
            health: 1.0,
            speed: 1.8,
            damage: 6,
            radius: 16.0,
            next: Some((BloonTier::Yellow, 1)),
        },
        BloonTier::Black => BloonSpec {
            health: 1.0,
            speed: 2.0,
            damage: 7,
            radius: 9.0,
            next: Some((BloonTier::Pink, 2)),
        },
        BloonTier::White => BloonSpec {
            health: 1.0,
            speed: 2.0,
            damage: 7,
            radius: 9.0,
            next: Some((BloonTier::Pink, 2)),
        },
    }
}

/// Tuning record for one tower archetype.
#[derive(Debug, Clone, Copy)]
pub struct TowerSpec {
    pub turret_length: f64,
    pub rounds_per_second: f64,
    pub rounds_per_shot: u32,
    pub round_speed: f64,
    pub round_damage: f64,
    pub round_radius: f64,
    /// Full jitter width per round (radians).
    pub round_spray: f64,
    pub round_collats: u32,
    pub round_kind: ParticleKind,
    pub targetting_range: f64,
    pub fire_pattern: FirePattern,
}

/// Get the tuning record for a tower archetype.
pub fn tower_spec(kind: TowerKind) -> TowerSpec {
    match kind {
        TowerKind::Basic => TowerSpec {
            turret_length: 20.0,
            rounds_per_second: 4.0,
            rounds_per_shot: 1,
            round_speed: 6.0,
            round_damage: 1.0,
            round_radius: 5.0,
            round_spray: 0.1,
            round_collats: 0,
            round_kind: ParticleKind::Pellet,
            targetting_range: 200.0,
            fire_pattern: FirePattern::Forward,
        },
        TowerKind::Spray => TowerSpec {
            turret_length: 14.0,
            rounds_per_second: 1.5,
            rounds_per_shot: 8,
            round_speed: 5.0,
            round_damage: 1.0,
            round_radius: 5.0,
            round_spray: 0.25,
            round_collats: 0,
            round_kind: ParticleKind::Pellet,
            targetting_range: 120.0,
            fire_pattern: FirePattern::Around,
        },
        TowerKind::Gatling => TowerSpec {
            turret_length: 24.0,
            rounds_per_second: 10.0,
            rounds_per_shot: 1,
            round_speed: 8.0,
            round_damage: 1.0,
            round_radius: 5.0,
            round_spray: 0.3,
            round_collats: 0,
            round_kind: ParticleKind::Pellet,
            targetting_range: 180.0,
            fire_pattern: FirePattern::Forward,
        },
    }
}

/// A single stat modification carried by an upgrade descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatDelta {
    /// Multiply rounds per second.
    RateMultiplier(f64),
    /// Multiply targeting range.
    RangeMultiplier(f64),
    /// Add to the penetration budget.
    CollatsBonus(u32),
}

/// Data-only upgrade descriptor. Effects are interpreted by
/// [`apply_upgrade`]; nothing here closes over tower internals.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeSpec {
    pub id: UpgradeId,
    pub name: &'static str,
    pub cost: u32,
    pub effects: &'static [StatDelta],
}

/// Get the descriptor for an upgrade id.
pub fn upgrade_spec(id: UpgradeId) -> UpgradeSpec {
    match id {
        UpgradeId::FasterFiring => UpgradeSpec {
            id,
            name: "Faster firing",
            cost: 100,
            effects: &[StatDelta::RateMultiplier(1.5)],
        },
        UpgradeId::IncreasedRange => UpgradeSpec {
            id,
            name: "Increased range",
            cost: 100,
            effects: &[StatDelta::RangeMultiplier(1.0)],
        },
        UpgradeId::PiercingShot => UpgradeSpec {
            id,
            name: "Piercing shot",
            cost: 100,
            effects: &[StatDelta::CollatsBonus(2)],
        },
        UpgradeId::PiercingShot2 => UpgradeSpec {
            id,
            name: "Piercing shot II",
            cost: 200,
            effects: &[StatDelta::CollatsBonus(2)],
        },
    }
}

/// Upgrades offered for a tower archetype, in shop order.
pub fn available_upgrades(kind: TowerKind) -> &'static [UpgradeId] {
    match kind {
        TowerKind::Basic => &[
            UpgradeId::FasterFiring,
            UpgradeId::IncreasedRange,
            UpgradeId::PiercingShot,
            UpgradeId::PiercingShot2,
        ],
        TowerKind::Spray | TowerKind::Gatling => &[],
    }
}

/// Apply an upgrade's stat deltas to a tower and record its id.
///
/// No dedup guard: applying the same upgrade twice stacks its effects
/// twice. The recorded id list gates cosmetic branches only.
pub fn apply_upgrade(tower: &mut Tower, id: UpgradeId) {
    let spec = upgrade_spec(id);
    for effect in spec.effects {
        match *effect {
            StatDelta::RateMultiplier(m) => tower.rounds_per_second *= m,
            StatDelta::RangeMultiplier(m) => tower.targetting_range *= m,
            StatDelta::CollatsBonus(n) => tower.round_collats += n,
        }
    }
    tower.upgrades.push(id);
}
