//! Events emitted by the simulation for driver and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::level::SegmentRecord;
use crate::types::{TowerId, TravellerId};

/// Observable simulation events, drained by the driver each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave schedule entry began spawning.
    WaveStarted { round: u32 },
    /// A bloon was destroyed by damage.
    BloonPopped { id: TravellerId, tier: BloonTier },
    /// A bloon reached the end of its path and cost lives.
    BloonLeaked {
        id: TravellerId,
        damage: u32,
        lives_remaining: u32,
    },
    /// Lives hit zero; the run is over.
    LivesExhausted { round: u32 },
    /// A tower emitted a volley.
    TowerFired { tower: TowerId, rounds: u32 },
    /// Response to a save-path command: the path as level records.
    PathSaved { records: Vec<SegmentRecord> },
}
