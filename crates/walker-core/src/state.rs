//! Frame snapshot: the complete visible state published to the driver
//! each tick. Building one is read-only; the renderer never touches the
//! simulation directly.

use std::collections::BTreeMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::level::SegmentRecord;
use crate::types::{PathId, SimTime, TowerId, TravellerId};

/// Complete per-tick state view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub lives: u32,
    pub round: u32,
    pub travellers: Vec<TravellerView>,
    pub towers: Vec<TowerView>,
    pub particles: Vec<ParticleView>,
    /// Path outlines as save records; populated only when debug is set.
    pub paths: Vec<PathOutlineView>,
    /// Segment under the mouse in edit mode.
    pub hovered_segment: Option<HoveredSegment>,
    /// Named telemetry counters, purely observational.
    pub counters: BTreeMap<String, f64>,
}

/// A traveller as drawn: identity, body, and path progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravellerView {
    pub id: TravellerId,
    pub kind: TravellerKind,
    pub position: DVec2,
    /// Layer of the current segment; None once departed.
    pub layer: Option<u8>,
    pub health: f64,
    pub max_health: f64,
    pub radius: f64,
    pub path_total_distance: f64,
    /// Trail dots, oldest first (walker kind only).
    pub trail: Vec<DVec2>,
}

/// A tower as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub position: DVec2,
    pub turret_angle: f64,
    pub turret_length: f64,
    pub range: f64,
    pub targetting_mode: TargetingMode,
    /// Current target id, if locked.
    pub target: Option<TravellerId>,
    pub upgrades: Vec<UpgradeId>,
}

/// A particle as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub kind: ParticleKind,
    pub position: DVec2,
    pub radius: f64,
}

/// A path's geometry for debug drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathOutlineView {
    pub path: PathId,
    pub segments: Vec<SegmentRecord>,
}

/// Edit-mode hover result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoveredSegment {
    pub path: PathId,
    pub segment: usize,
}
