//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are stored in
//! shared state for synchronous polling by the driver.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use walker_core::commands::PlayerCommand;
use walker_core::constants::TICK_RATE;
use walker_core::enums::GamePhase;
use walker_core::state::FrameSnapshot;
use walker_path::Path;
use walker_sim::engine::{SimConfig, Simulation};
use walker_sim::systems::wave_spawner::WaveSchedule;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the driver thread to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}

/// Everything the loop thread needs to build its engine.
pub struct LoopSetup {
    pub config: SimConfig,
    pub paths: Vec<Path>,
    pub schedule: WaveSchedule,
    /// Wall-clock run budget; the loop exits once it elapses.
    pub duration: Duration,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the join handle. The shared snapshot
/// slot is refreshed after every tick, so the last value left in it when
/// the thread exits is the final state of the run.
pub fn spawn_game_loop(
    setup: LoopSetup,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("walker-game-loop".into())
        .spawn(move || {
            run_game_loop(setup, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until the budget elapses, the run ends in a game
/// over, a Shutdown command arrives, or the channel disconnects.
fn run_game_loop(
    setup: LoopSetup,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut sim = Simulation::new(setup.config);
    sim.set_paths(setup.paths);
    sim.set_wave_schedule(setup.schedule);

    let started = Instant::now();
    let mut next_tick_time = Instant::now();
    let mut last_report_tick = 0u64;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    sim.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = sim.tick();

        // 3. Telemetry: events at debug level, a summary line once per
        //    simulated second
        for event in sim.drain_events() {
            debug!("{event:?}");
        }
        if snapshot.time.tick >= last_report_tick + u64::from(TICK_RATE) {
            last_report_tick = snapshot.time.tick;
            info!(
                "tick {} lives {} round {} travellers {:.0} particles {:.0}",
                snapshot.time.tick,
                snapshot.lives,
                snapshot.round,
                snapshot.counters.get("travellers").copied().unwrap_or(0.0),
                snapshot.counters.get("particles").copied().unwrap_or(0.0),
            );
        }

        let final_tick = snapshot.time.tick;
        let game_over = snapshot.phase == GamePhase::GameOver;

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if game_over {
            info!("lives exhausted at tick {final_tick}, stopping");
            return;
        }
        if started.elapsed() >= setup.duration {
            info!("run budget elapsed at tick {final_tick}, stopping");
            return;
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = sim.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind; reset rather than spiral trying to catch up
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use walker_core::enums::{BloonTier, TravellerKind};
    use walker_path::PathSegment;

    fn line_path(a: DVec2, b: DVec2) -> Path {
        Path::from_segments(vec![PathSegment::line(a, b, 0)])
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.set_paths(vec![line_path(DVec2::ZERO, DVec2::new(400.0, 0.0))]);
        sim.queue_command(PlayerCommand::StartGame);
        for _ in 0..8 {
            sim.queue_command(PlayerCommand::SpawnTraveller {
                kind: TravellerKind::Bloon(BloonTier::Red),
                path: 0,
            });
        }

        // Run enough ticks to populate entities
        for _ in 0..50 {
            sim.tick();
        }

        let snapshot = sim.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());

        let parsed: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.time.tick, snapshot.time.tick);
        assert_eq!(parsed.travellers.len(), snapshot.travellers.len());
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut sim = Simulation::new(SimConfig::default());

        sim.queue_command(PlayerCommand::StartGame);
        let snap = sim.tick();
        assert_eq!(snap.phase, GamePhase::Active);

        sim.queue_command(PlayerCommand::Pause);
        let snap = sim.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        let paused_tick = snap.time.tick;

        // Tick while paused: time should not advance
        let snap = sim.tick();
        assert_eq!(snap.time.tick, paused_tick);

        sim.queue_command(PlayerCommand::Resume);
        let snap = sim.tick();
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.time.tick > paused_tick);
    }

    #[test]
    fn test_loop_thread_exits_once_budget_elapses() {
        let setup = LoopSetup {
            config: SimConfig::default(),
            paths: vec![line_path(DVec2::ZERO, DVec2::new(400.0, 0.0))],
            schedule: WaveSchedule::default(),
            duration: Duration::ZERO,
        };
        let latest = Arc::new(Mutex::new(None));
        let (_tx, handle) = spawn_game_loop(setup, Arc::clone(&latest));

        handle.join().unwrap();

        // The slot holds whatever the last tick produced
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_loop_thread_honors_shutdown_command() {
        let setup = LoopSetup {
            config: SimConfig::default(),
            paths: Vec::new(),
            schedule: WaveSchedule::default(),
            duration: Duration::from_secs(5),
        };
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(setup, Arc::clone(&latest));

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
