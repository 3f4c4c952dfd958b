//! Simulation engine for the walker tower-defense core.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces FrameSnapshots for the driver.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, Simulation};
pub use walker_core as core;
