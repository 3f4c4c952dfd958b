//! Wave scheduling: timed bloon groups released onto a path.

use hecs::World;
use serde::{Deserialize, Serialize};

use walker_core::enums::BloonTier;
use walker_core::events::GameEvent;
use walker_core::types::{PathId, TravellerId};
use walker_path::Path;

use crate::world_setup;

/// One scheduled group of bloons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveEntry {
    /// Tick at which this entry starts spawning.
    pub start_tick: u64,
    pub tier: BloonTier,
    /// Bloons in this entry.
    pub count: u32,
    /// Ticks between consecutive spawns within the entry.
    pub interval: u64,
    /// Path whose origin receives the spawns.
    pub path: PathId,
    /// Spawns emitted so far.
    #[serde(default)]
    pub spawned: u32,
}

/// The complete schedule for a run. Data only; the driver may install its
/// own in place of the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Default demo run: escalating tiers on path 0, one entry per round.
    pub fn default_run() -> Self {
        let entry = |start_tick, tier, count, interval| WaveEntry {
            start_tick,
            tier,
            count,
            interval,
            path: 0,
            spawned: 0,
        };
        Self {
            waves: vec![
                entry(60, BloonTier::Red, 5, 30),
                entry(600, BloonTier::Blue, 4, 30),
                entry(1200, BloonTier::Green, 4, 24),
                entry(1800, BloonTier::Yellow, 3, 20),
                entry(2400, BloonTier::Pink, 3, 20),
                entry(3000, BloonTier::Black, 2, 30),
                entry(3600, BloonTier::White, 2, 30),
            ],
        }
    }

    /// Total bloons across all entries.
    pub fn total_bloons(&self) -> u32 {
        self.waves.iter().map(|entry| entry.count).sum()
    }

    /// Whether every entry has finished spawning.
    pub fn is_finished(&self) -> bool {
        self.waves.iter().all(|entry| entry.spawned >= entry.count)
    }
}

/// Spawn any bloons due this tick. The first spawn of an entry advances
/// the round counter and announces the wave.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    schedule: &mut WaveSchedule,
    paths: &[Path],
    next_traveller_id: &mut TravellerId,
    round: &mut u32,
    events: &mut Vec<GameEvent>,
    current_tick: u64,
) {
    for wave in &mut schedule.waves {
        if wave.spawned >= wave.count || current_tick < wave.start_tick {
            continue;
        }
        if (current_tick - wave.start_tick) % wave.interval.max(1) == 0 {
            if wave.spawned == 0 {
                *round += 1;
                events.push(GameEvent::WaveStarted { round: *round });
            }
            world_setup::spawn_bloon(world, paths, wave.tier, wave.path, next_traveller_id);
            wave.spawned += 1;
        }
    }
}
