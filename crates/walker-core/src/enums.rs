//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level loaded, simulation not yet started.
    #[default]
    Idle,
    Active,
    Paused,
    /// Lives exhausted; further ticks are no-ops.
    GameOver,
}

/// World operating mode. Edit mode enables the per-tick path hover query;
/// play mode is the normal simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Play,
    Edit,
}

/// Geometric kind of a path segment. Doubles as the `type` tag in level
/// records, so the serialized names are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Straight line between 2 points.
    Line,
    /// Cubic Bezier over 4 control points.
    Bezier,
}

/// Bloon tier. Ordered weakest to strongest; each tier past Red splits into
/// the tier(s) named by its spawn rule when destroyed by damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloonTier {
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Black,
    White,
}

/// What a traveller is. Bloons carry combat stats and leak lives at the path
/// end; walkers are neutral path-followers that record a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravellerKind {
    Bloon(BloonTier),
    Walker,
}

impl TravellerKind {
    /// Whether this kind participates in combat (damage, splitting, leaking).
    pub fn is_bloon(&self) -> bool {
        matches!(self, TravellerKind::Bloon(_))
    }
}

/// Tower archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Single-barrel pellet tower.
    #[default]
    Basic,
    /// Radial burst emitter (fires a full ring per shot).
    Spray,
    /// High rate of fire, wide jitter.
    Gatling,
}

/// Target selection policy over the sorted traveller views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetingMode {
    /// Furthest along its path (closest to the goal).
    #[default]
    First,
    /// Least far along its path.
    Last,
    /// Highest max health, ties broken by path progress.
    Strongest,
}

/// Where a tower's aim point comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetingSource {
    /// Acquire travellers through the world's targeting service.
    #[default]
    Auto,
    /// Track the sampled mouse position.
    Mouse,
}

/// Emission pattern for one firing of a tower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePattern {
    /// All rounds along the turret angle, each spray-jittered.
    #[default]
    Forward,
    /// Rounds evenly spaced over the full circle, each spray-jittered.
    Around,
}

/// Particle behavior tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Ballistic projectile: moves, collides, damages.
    #[default]
    Pellet,
    /// Stationary pop marker: shrinks over its short life, never collides.
    Pop,
}

/// Upgrade identity. Records which upgrades a tower has taken; the stat
/// effects live in the descriptor table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpgradeId {
    FasterFiring,
    IncreasedRange,
    PiercingShot,
    #[serde(rename = "piercing-shot-2")]
    PiercingShot2,
}
