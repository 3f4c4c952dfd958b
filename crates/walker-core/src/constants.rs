//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Velocities and lifetimes are expressed
/// per-tick, so this is the frame rate the tuning assumes.
pub const TICK_RATE: u32 = 60;

/// Full circle in radians.
pub const FULL_CIRCLE: f64 = std::f64::consts::TAU;

// --- Path traversal ---

/// Divisor applied to the desired travel distance to get the acceptable
/// chord-length error in the arclength-correction loop.
pub const TRAVERSE_TOLERANCE_DIVISOR: f64 = 20.0;

/// Iteration cap for the arclength-correction loop. Empirical bound; the
/// loop is not guaranteed to converge, only to stop.
pub const TRAVERSE_MAX_ITERATIONS: u32 = 20;

/// Damping applied to the correction step after each iteration.
pub const TRAVERSE_DAMPING: f64 = 1.2;

/// Velocity damping per tick once a traveller has departed its path.
pub const AIR_DAMP: f64 = 0.92;

// --- Path geometry ---

/// Uniform parameter samples used to integrate a Bezier segment's arclength
/// at construction time. Precision knob, not a correctness requirement.
pub const BEZIER_LENGTH_SAMPLES: u32 = 200;

/// Uniform parameter samples used to approximate Bezier point-containment
/// (chord tests). Drives editor hit-testing only.
pub const BEZIER_COLLIDE_SAMPLES: u32 = 20;

/// Hit radius for the edit-mode segment hover query (px).
pub const EDIT_HOVER_RADIUS: f64 = 10.0;

// --- Travellers ---

/// Default lifetime budget in ticks. Effectively unbounded for units that
/// are expected to die to damage or leak out first.
pub const TRAVELLER_LIFETIME: u32 = 9999;

/// Maximum recorded trail positions for walker-kind travellers.
pub const TRAIL_MAX_POINTS: usize = 12;

// --- Towers ---

/// Aim-point displacement applied to both axes of a target position before
/// computing the turret angle, so shots lead into the sprite body.
pub const AIM_OFFSET: f64 = 6.0;

// --- Particles ---

/// Default particle lifetime in ticks (pellets expire by range first).
pub const PARTICLE_LIFETIME: i32 = 9999;

/// Pop marker lifetime in ticks.
pub const POP_LIFETIME: i32 = 6;

/// Pop marker radius at spawn (px); shrinks linearly over its life.
pub const POP_RADIUS: f64 = 22.0;

/// Fallback pellet radius (px) when no round radius is supplied.
pub const PELLET_RADIUS: f64 = 4.0;

// --- Run state ---

/// Lives at the start of a run.
pub const STARTING_LIVES: u32 = 100;

// --- Level data ---

/// Maximum number of background layer slots a level may declare.
pub const LEVEL_LAYER_MAX: usize = 6;

/// Attempts to find a declared layer file before the load fails.
pub const LAYER_RETRY_LIMIT: u32 = 10;

/// Delay between layer-presence attempts (ms).
pub const LAYER_RETRY_DELAY_MS: u64 = 100;
