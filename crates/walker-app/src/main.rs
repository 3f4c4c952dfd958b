//! walker-app: headless driver for the walker simulation.
//!
//! Usage:
//!   walker-app --level assets/level.json --seed 7 --duration 30
//!   walker-app --level assets/level.json --seed 7 --duration 30 --time-scale 4

use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::info;

use walker_app::game_loop::{spawn_game_loop, GameLoopCommand, LoopSetup};
use walker_core::commands::PlayerCommand;
use walker_core::enums::{TowerKind, UpgradeId};
use walker_path::{load_level, LoadOptions};
use walker_sim::engine::SimConfig;
use walker_sim::systems::wave_spawner::WaveSchedule;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let level_file = match parse_path(&args, "--level") {
        Some(p) => p,
        None => {
            eprintln!("Error: --level <path> is required");
            print_usage();
            process::exit(1);
        }
    };
    let seed = match parse_u64(&args, "--seed") {
        Some(s) => s,
        None => {
            eprintln!("Error: --seed <n> is required");
            print_usage();
            process::exit(1);
        }
    };
    let duration_secs = match parse_u64(&args, "--duration") {
        Some(d) => d,
        None => {
            eprintln!("Error: --duration <secs> is required");
            print_usage();
            process::exit(1);
        }
    };
    let time_scale = parse_f64(&args, "--time-scale", 1.0);

    let level = match load_level(&level_file, &LoadOptions::default()) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("Error: failed to load {}: {err}", level_file.display());
            process::exit(1);
        }
    };
    info!(
        "loaded {}: {} paths, {} layer slots",
        level_file.display(),
        level.paths.len(),
        level.data.layers.len()
    );

    let setup = LoopSetup {
        config: SimConfig {
            seed,
            time_scale,
            ..SimConfig::default()
        },
        paths: level.paths,
        schedule: WaveSchedule::default_run(),
        duration: Duration::from_secs(duration_secs),
    };

    let latest_snapshot = Arc::new(Mutex::new(None));
    let (cmd_tx, handle) = spawn_game_loop(setup, Arc::clone(&latest_snapshot));

    let boot = std::iter::once(PlayerCommand::StartGame).chain(demo_commands());
    for cmd in boot {
        if cmd_tx.send(GameLoopCommand::PlayerCommand(cmd)).is_err() {
            eprintln!("Error: game loop exited before the run started");
            process::exit(1);
        }
    }

    if handle.join().is_err() {
        eprintln!("Error: game loop thread panicked");
        process::exit(1);
    }

    if let Ok(lock) = latest_snapshot.lock() {
        match lock.as_ref() {
            Some(s) => println!(
                "final state: phase {:?} tick {} lives {} round {}",
                s.phase, s.time.tick, s.lives, s.round
            ),
            None => println!("final state: no ticks ran"),
        }
    };
}

/// Demo defences sized for the bundled level: every tower kind, plus
/// stacked upgrades on the two basic towers. Tower ids are assigned in
/// placement order, so the upgrades can name them directly.
fn demo_commands() -> Vec<PlayerCommand> {
    vec![
        PlayerCommand::PlaceTower {
            kind: TowerKind::Basic,
            x: 490.0,
            y: 350.0,
        },
        PlayerCommand::PlaceTower {
            kind: TowerKind::Spray,
            x: 290.0,
            y: 170.0,
        },
        PlayerCommand::PlaceTower {
            kind: TowerKind::Basic,
            x: 90.0,
            y: 290.0,
        },
        PlayerCommand::PlaceTower {
            kind: TowerKind::Gatling,
            x: 750.0,
            y: 250.0,
        },
        PlayerCommand::ApplyUpgrade {
            tower: 0,
            upgrade: UpgradeId::FasterFiring,
        },
        PlayerCommand::ApplyUpgrade {
            tower: 0,
            upgrade: UpgradeId::PiercingShot,
        },
        PlayerCommand::ApplyUpgrade {
            tower: 0,
            upgrade: UpgradeId::PiercingShot2,
        },
        PlayerCommand::ApplyUpgrade {
            tower: 0,
            upgrade: UpgradeId::IncreasedRange,
        },
        PlayerCommand::ApplyUpgrade {
            tower: 2,
            upgrade: UpgradeId::FasterFiring,
        },
        PlayerCommand::ApplyUpgrade {
            tower: 2,
            upgrade: UpgradeId::PiercingShot,
        },
    ]
}

fn print_usage() {
    eprintln!(
        "walker-app: headless driver for the walker simulation\n\
         \n\
         Options:\n\
         \n\
           --level <path>      Level JSON file to load\n\
           --seed <n>          RNG seed for the run\n\
           --duration <secs>   Wall-clock run budget in seconds\n\
           --time-scale <x>    Simulation speed multiplier (default: 1)\n\
         \n\
         Example:\n\
         \n\
           walker-app --level assets/level.json --seed 7 --duration 30 --time-scale 4\n"
    );
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_u64(args: &[String], flag: &str) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn parse_f64(args: &[String], flag: &str, default: f64) -> f64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<f64>() {
                return v;
            }
        }
    }
    default
}
