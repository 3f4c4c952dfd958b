//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only passes) plus the engine-owned buffers they need. They do not
//! own state; all state lives in components or on the engine.

pub mod cleanup;
pub mod collision;
pub mod editor;
pub mod fire_control;
pub mod snapshot;
pub mod traversal;
pub mod views;
pub mod wave_spawner;
