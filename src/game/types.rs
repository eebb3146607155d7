//! Data records for the simulation: world, bird, pipes and events.

use crate::config::GameConfig;
use crate::constants::*;

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing started yet.
    Idle,
    Running,
    /// Run ended; only `start` leaves this phase.
    GameOver,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Floor,
    Pipe,
}

/// Domain events emitted by `start` and `advance`, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RunStarted,
    PipeSpawned { top_height: f64, gap: f64 },
    ScoreChanged { score: u32 },
    LevelUp { level: u32, speed: f64, gap: f64 },
    GameOver {
        score: u32,
        level: u32,
        cause: DeathCause,
    },
}

/// Difficulty and progress for the current run.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub score: u32,
    pub level: u32,
    /// Velocity added to the bird each tick.
    pub gravity: f64,
    /// Horizontal scroll per tick.
    pub speed: f64,
    /// Vertical gap for newly spawned pipes.
    pub pipe_gap: f64,
    /// `pipe_gap` never drops below this.
    pub min_pipe_gap: f64,
    pub min_pipe_interval_ms: f64,
    pub max_pipe_interval_ms: f64,
    /// Time accumulated since the last pipe spawned.
    pub since_last_spawn_ms: f64,
    /// Accumulated time at which the next pipe spawns. Resampled per spawn.
    pub next_spawn_ms: f64,
}

impl World {
    /// Level-1 difficulty from the given config.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            level: 1,
            gravity: config.gravity,
            speed: config.speed,
            pipe_gap: config.pipe_gap,
            min_pipe_gap: config.min_pipe_gap,
            min_pipe_interval_ms: config.min_pipe_interval_ms,
            max_pipe_interval_ms: config.max_pipe_interval_ms,
            since_last_spawn_ms: 0.0,
            next_spawn_ms: config.min_pipe_interval_ms,
        }
    }

    /// Time left until the next pipe spawns, never negative.
    pub fn next_spawn_in_ms(&self) -> f64 {
        (self.next_spawn_ms - self.since_last_spawn_ms).max(0.0)
    }
}

/// The player. `x` is fixed; `(x, y)` is the centre of the bird's box.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: f64,
    /// Velocity a jump sets (negative = upward).
    pub jump_impulse: f64,
}

impl Bird {
    pub fn new(jump_impulse: f64) -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0.0,
            jump_impulse,
        }
    }

    /// Back to the rest position with no velocity.
    pub fn reset(&mut self) {
        self.y = BIRD_START_Y;
        self.velocity = 0.0;
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// A pipe pair: a top segment from the ceiling down to `top_height` and a
/// bottom segment from `bottom_y` down to the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    pub top_height: f64,
    /// `top_height + gap` at spawn time.
    pub bottom_y: f64,
    /// Set once the bird has been awarded this pipe's point.
    pub passed: bool,
}

impl Pipe {
    /// A pipe at the right edge of the playfield.
    pub fn new(top_height: f64, gap: f64) -> Self {
        Self::at(WORLD_WIDTH, top_height, gap)
    }

    pub fn at(x: f64, top_height: f64, gap: f64) -> Self {
        Self {
            x,
            width: PIPE_WIDTH,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap(&self) -> f64 {
        self.bottom_y - self.top_height
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub phase: Phase,
    pub world: World,
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first.
    pub pipes: Vec<Pipe>,

    /// Elapsed time not yet consumed by a physics step.
    pub accumulated_ms: u64,
    /// Physics steps run in the current run.
    pub tick_count: u64,
}

impl Game {
    /// A game waiting in [`Phase::Idle`] for its first `start`.
    pub fn new(config: GameConfig) -> Self {
        let config = config.validate();
        Self {
            phase: Phase::Idle,
            world: World::new(&config),
            bird: Bird::new(config.jump_impulse),
            pipes: Vec::new(),
            accumulated_ms: 0,
            tick_count: 0,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_idle() {
        let game = Game::default();
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.world.score, 0);
        assert_eq!(game.world.level, 1);
        assert!(game.pipes.is_empty());
        assert!(!game.is_running());
    }

    #[test]
    fn test_bird_box_edges() {
        let bird = Bird::new(DEFAULT_JUMP_IMPULSE);
        assert_eq!(bird.top(), 320.0 - 12.0);
        assert_eq!(bird.bottom(), 320.0 + 12.0);
        assert_eq!(bird.left(), 50.0 - 17.0);
        assert_eq!(bird.right(), 50.0 + 17.0);
    }

    #[test]
    fn test_pipe_spawns_at_right_edge() {
        let pipe = Pipe::new(100.0, 200.0);
        assert_eq!(pipe.x, WORLD_WIDTH);
        assert_eq!(pipe.bottom_y, 300.0);
        assert_eq!(pipe.gap(), 200.0);
        assert_eq!(pipe.right_edge(), WORLD_WIDTH + PIPE_WIDTH);
        assert!(!pipe.passed);
    }

    #[test]
    fn test_next_spawn_in_never_negative() {
        let mut world = World::new(&GameConfig::default());
        world.next_spawn_ms = 1000.0;
        world.since_last_spawn_ms = 1500.0;
        assert_eq!(world.next_spawn_in_ms(), 0.0);
        world.since_last_spawn_ms = 400.0;
        assert_eq!(world.next_spawn_in_ms(), 600.0);
    }
}
