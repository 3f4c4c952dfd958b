//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Unique traveller identifier. Assigned by the world on insertion,
/// monotonically increasing, never reused.
pub type TravellerId = u64;

/// Unique tower identifier. Monotonic like [`TravellerId`], separate counter.
pub type TowerId = u32;

/// Index of a path in the world's path table. Travellers refer to their
/// path by index; the table itself is read-only during a tick.
pub type PathId = usize;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Elapsed simulation time in milliseconds. Feeds the tower fire-rate
    /// gate, which compares millisecond budgets of the form `1000 / rate`.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs * 1000.0
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
