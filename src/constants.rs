//! Playfield geometry and default tuning.
//!
//! All distances are in logical playfield units; per-tick quantities assume
//! one physics step of [`TICK_MS`].

/// Logical playfield width.
pub const WORLD_WIDTH: f64 = 360.0;
/// Logical playfield height.
pub const WORLD_HEIGHT: f64 = 640.0;
/// Height of the ground strip at the bottom of the playfield.
pub const GROUND_HEIGHT: f64 = 80.0;
/// Y coordinate of the floor line the bird must not cross.
pub const FLOOR_Y: f64 = WORLD_HEIGHT - GROUND_HEIGHT;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = WORLD_HEIGHT / 2.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;

// Pipes
pub const PIPE_WIDTH: f64 = 60.0;
/// Smallest top-segment height a spawned pipe may have.
pub const PIPE_MIN_TOP: f64 = 50.0;
/// Space reserved below the gap when drawing the top height, so the bottom
/// segment stays visible above the ground.
pub const PIPE_SPAWN_MARGIN: f64 = 150.0;

// Default difficulty (level 1)
pub const DEFAULT_GRAVITY: f64 = 0.5;
pub const DEFAULT_JUMP_IMPULSE: f64 = -10.0;
pub const DEFAULT_SPEED: f64 = 3.0;
pub const DEFAULT_PIPE_GAP: f64 = 200.0;
pub const MIN_PIPE_GAP: f64 = 120.0;
pub const DEFAULT_MIN_PIPE_INTERVAL_MS: f64 = 1800.0;
pub const DEFAULT_MAX_PIPE_INTERVAL_MS: f64 = 2800.0;

// Level progression
pub const POINTS_PER_LEVEL: u32 = 10;
pub const LEVEL_SPEED_STEP: f64 = 0.5;
pub const LEVEL_GAP_STEP: f64 = 8.0;
/// Base spawn interval grows by this much per level above 1.
pub const LEVEL_INTERVAL_STEP_MS: f64 = 50.0;
/// Spawn variation at level 0; shrinks by [`VARIATION_STEP_MS`] per level.
pub const BASE_INTERVAL_VARIATION_MS: f64 = 800.0;
pub const VARIATION_STEP_MS: f64 = 30.0;
pub const MIN_INTERVAL_VARIATION_MS: f64 = 300.0;

/// How long the level-up indicator stays visible.
pub const LEVEL_UP_BANNER_MS: u64 = 2000;

/// Fixed physics step. 62.5 steps per second, so motion runs about 4%
/// quicker than per-frame tuning played at 60 Hz.
pub const TICK_MS: u64 = 16;
/// Elapsed time per `advance` call is clamped to this to avoid a burst of
/// steps after a stall.
pub const MAX_FRAME_MS: u64 = 100;
/// Frame budget for the terminal loop.
pub const DEFAULT_FRAME_MS: u64 = 16;
