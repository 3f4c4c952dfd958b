//! Path geometry and level loading for the walker simulation.
//!
//! Paths are ordered lists of segments (straight lines and cubic Bezier
//! curves). Travellers address a position on a path by segment index plus a
//! normalized parameter, so everything here is deterministic pure geometry:
//! no clocks, no randomness.

pub use walker_core as core;

pub mod geometry;
pub mod level;
pub mod path;
pub mod segment;

pub use level::{load_level, LoadOptions, LoadedLevel};
pub use path::Path;
pub use segment::{Bezier, Line, PathSegment, SegmentShape};
