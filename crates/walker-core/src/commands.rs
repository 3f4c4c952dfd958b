//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Continuous
//! mouse state travels separately in [`InputFrame`], sampled once per tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{PathId, TowerId};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run control ---
    /// Start the run (Idle -> Active).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Flip between Active and Paused (the pause/play key).
    TogglePause,
    /// Switch between play and edit mode (the mode-toggle key).
    SetMode { mode: GameMode },

    // --- Towers ---
    /// Place a tower of the given archetype.
    PlaceTower { kind: TowerKind, x: f64, y: f64 },
    /// Change a tower's target selection policy.
    SetTargetingMode { tower: TowerId, mode: TargetingMode },
    /// Change where a tower's aim point comes from.
    SetTargetingSource { tower: TowerId, source: TargetingSource },
    /// Apply an upgrade to a tower. Repeat applications stack.
    ApplyUpgrade { tower: TowerId, upgrade: UpgradeId },

    // --- Travellers ---
    /// Spawn a traveller at a path's origin (driver-side spawning entry).
    SpawnTraveller { kind: TravellerKind, path: PathId },

    // --- Level ---
    /// Serialize a path to save records, emitted as a path-saved event.
    SavePath { path: PathId },
}

/// Continuous input sampled once per tick by the driver.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputFrame {
    /// Mouse position in world coordinates (px).
    pub mouse: DVec2,
    /// Whether the primary button is held.
    pub mouse_down: bool,
}
