//! Core types and definitions for the WALKER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, level records, stat
//! catalogs, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod level;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
