//! Headless driver for the walker simulation.
//!
//! Wires the level loader and the simulation engine into a fixed-rate
//! game loop running on its own thread, and exposes the loop's command
//! channel and snapshot slot to the binary.

pub mod game_loop;

pub use walker_core as core;
