//! Core simulation engine.
//!
//! `Simulation` owns the hecs ECS world and the path table, processes
//! player commands, runs all systems in a fixed order, and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use walker_core::commands::{InputFrame, PlayerCommand};
use walker_core::components::Tower;
use walker_core::constants::{AIR_DAMP, STARTING_LIVES};
use walker_core::enums::{GameMode, GamePhase, TravellerKind};
use walker_core::events::GameEvent;
use walker_core::state::{FrameSnapshot, HoveredSegment, TravellerView};
use walker_core::stats;
use walker_core::types::{SimTime, TowerId, TravellerId};
use walker_path::Path;

use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation. Immutable once the engine
/// is constructed.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same run.
    pub seed: u64,
    /// Time scale hint for the driver loop (1.0 = normal).
    pub time_scale: f64,
    /// Initial world mode.
    pub mode: GameMode,
    /// Include path outlines in snapshots.
    pub debug: bool,
    /// Run the arclength-corrective traversal step on curved segments.
    pub precise_traversal: bool,
    /// Per-tick velocity retention for departed travellers.
    pub air_damp: f64,
    /// Keep a tower's target while it stays in range instead of
    /// re-picking every tick.
    pub sticky_targeting: bool,
    pub starting_lives: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            mode: GameMode::Play,
            debug: false,
            precise_traversal: true,
            air_damp: AIR_DAMP,
            sticky_targeting: false,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct Simulation {
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    config: SimConfig,
    rng: ChaCha8Rng,
    paths: Vec<Path>,
    lives: u32,
    round: u32,
    next_traveller_id: TravellerId,
    next_tower_id: TowerId,
    command_queue: VecDeque<PlayerCommand>,
    input: InputFrame,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    wave_schedule: WaveSchedule,
    hovered_segment: Option<HoveredSegment>,
    views_by_distance: Vec<TravellerView>,
    views_by_strength: Vec<TravellerView>,
}

impl Simulation {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: config.mode,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            paths: Vec::new(),
            lives: config.starting_lives,
            round: 0,
            next_traveller_id: 0,
            next_tower_id: 0,
            command_queue: VecDeque::new(),
            input: InputFrame::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            wave_schedule: WaveSchedule::default(),
            hovered_segment: None,
            views_by_distance: Vec::new(),
            views_by_strength: Vec::new(),
            config,
        }
    }

    /// Install the level's paths. Travellers refer to paths by index, so
    /// this must happen before any traveller spawns.
    pub fn set_paths(&mut self, paths: Vec<Path>) {
        self.paths = paths;
    }

    /// Install a wave schedule, replacing the (empty) default.
    pub fn set_wave_schedule(&mut self, schedule: WaveSchedule) {
        self.wave_schedule = schedule;
    }

    /// Store the continuous input sampled for the next tick.
    pub fn set_input(&mut self, input: InputFrame) {
        self.input = input;
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.mode,
            self.lives,
            self.round,
            &self.paths,
            self.hovered_segment,
            self.config.debug,
        )
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current world mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the configured time scale.
    pub fn time_scale(&self) -> f64 {
        self.config.time_scale
    }

    /// Lives remaining.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setups).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a walker directly (for tests needing a chosen speed).
    #[cfg(test)]
    pub fn spawn_test_walker(&mut self, path: usize, speed: f64) -> TravellerId {
        world_setup::spawn_walker(
            &mut self.world,
            &self.paths,
            path,
            speed,
            &mut self.next_traveller_id,
        )
    }

    /// Spawn a bloon directly (for tests bypassing the wave scheduler).
    #[cfg(test)]
    pub fn spawn_test_bloon(
        &mut self,
        tier: walker_core::enums::BloonTier,
        path: usize,
    ) -> TravellerId {
        world_setup::spawn_bloon(
            &mut self.world,
            &self.paths,
            tier,
            path,
            &mut self.next_traveller_id,
        )
    }

    /// Spawn a tower directly (for tests bypassing the command queue).
    #[cfg(test)]
    pub fn spawn_test_tower(
        &mut self,
        kind: walker_core::enums::TowerKind,
        position: DVec2,
    ) -> TowerId {
        world_setup::spawn_tower(&mut self.world, kind, position, &mut self.next_tower_id)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Idle {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                _ => {}
            },
            PlayerCommand::SetMode { mode } => {
                self.mode = mode;
                if mode != GameMode::Edit {
                    self.hovered_segment = None;
                }
            }
            PlayerCommand::PlaceTower { kind, x, y } => {
                world_setup::spawn_tower(
                    &mut self.world,
                    kind,
                    DVec2::new(x, y),
                    &mut self.next_tower_id,
                );
            }
            PlayerCommand::SetTargetingMode { tower, mode } => {
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower {
                        t.targetting_mode = mode;
                        t.target = None;
                    }
                }
            }
            PlayerCommand::SetTargetingSource { tower, source } => {
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower {
                        t.targetting_source = source;
                        t.target = None;
                    }
                }
            }
            PlayerCommand::ApplyUpgrade { tower, upgrade } => {
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower {
                        stats::apply_upgrade(t, upgrade);
                    }
                }
            }
            PlayerCommand::SpawnTraveller { kind, path } => match kind {
                TravellerKind::Bloon(tier) => {
                    world_setup::spawn_bloon(
                        &mut self.world,
                        &self.paths,
                        tier,
                        path,
                        &mut self.next_traveller_id,
                    );
                }
                TravellerKind::Walker => {
                    world_setup::spawn_walker(
                        &mut self.world,
                        &self.paths,
                        path,
                        1.0,
                        &mut self.next_traveller_id,
                    );
                }
            },
            PlayerCommand::SavePath { path } => {
                if let Some(p) = self.paths.get(path) {
                    self.events.push(GameEvent::PathSaved {
                        records: p.to_records(),
                    });
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave_schedule,
            &self.paths,
            &mut self.next_traveller_id,
            &mut self.round,
            &mut self.events,
            self.time.tick,
        );
        // 2. Edit-mode hover query
        self.hovered_segment = if self.mode == GameMode::Edit {
            systems::editor::run(&self.paths, self.input.mouse)
        } else {
            None
        };
        // 3. Path traversal and free flight
        systems::traversal::run(
            &mut self.world,
            &self.paths,
            self.config.precise_traversal,
            self.config.air_damp,
        );
        // 4. Traveller cleanup (leaked bloons cost lives)
        systems::cleanup::run_travellers(&mut self.world, &mut self.lives, &mut self.events);
        // 5. Rebuild targeting views from the post-cleanup population
        systems::views::rebuild(
            &self.world,
            &self.paths,
            &mut self.views_by_distance,
            &mut self.views_by_strength,
        );
        // 6. Fire control (may spawn particles)
        systems::fire_control::run(
            &mut self.world,
            &mut self.rng,
            &self.views_by_distance,
            &self.views_by_strength,
            self.input,
            &self.time,
            self.config.sticky_targeting,
            &mut self.events,
        );
        // 7. Particle stepping and collision (may split bloons)
        systems::collision::run(&mut self.world, &mut self.next_traveller_id, &mut self.events);
        // 8. Particle cleanup
        systems::cleanup::run_particles(&mut self.world, &mut self.despawn_buffer);
        // 9. Defeat check
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::LivesExhausted { round: self.round });
        }
    }
}
