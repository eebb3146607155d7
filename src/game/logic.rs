//! Game logic: run lifecycle, physics, spawning, scoring and collisions.

use super::types::*;
use crate::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap upward. Ignored unless a run is active.
    Jump,
    /// Start a new run (or restart the current one).
    Start,
}

/// Apply a player input. Returns any events the input caused.
pub fn process_input<R: Rng>(game: &mut Game, input: GameInput, rng: &mut R) -> Vec<GameEvent> {
    match input {
        GameInput::Jump => {
            jump(game);
            Vec::new()
        }
        GameInput::Start => start(game, rng),
    }
}

/// Reset difficulty, score, bird and pipes, then begin a run.
///
/// Valid from every phase; restarting mid-run is the same as starting fresh.
pub fn start<R: Rng>(game: &mut Game, rng: &mut R) -> Vec<GameEvent> {
    game.world = World::new(&game.config);
    game.world.next_spawn_ms = next_interval(&game.world, game.config.clamp_spawn_interval, rng);
    game.bird = Bird::new(game.config.jump_impulse);
    game.pipes.clear();
    game.accumulated_ms = 0;
    game.tick_count = 0;
    game.phase = Phase::Running;

    log::debug!(
        "run started, first pipe in {:.0}ms",
        game.world.next_spawn_ms
    );
    vec![GameEvent::RunStarted]
}

/// Set the bird's velocity to the jump impulse (not additive).
pub fn jump(game: &mut Game) {
    if game.phase != Phase::Running {
        return;
    }
    game.bird.velocity = game.bird.jump_impulse;
}

/// Advance the simulation by `dt_ms` of wall time.
///
/// Elapsed time is clamped to [`MAX_FRAME_MS`] and consumed in fixed
/// [`TICK_MS`] steps; the remainder carries over to the next call. Stops at
/// the first step that ends the run. Does nothing unless a run is active.
pub fn advance<R: Rng>(game: &mut Game, dt_ms: u64, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !game.is_running() {
        return events;
    }

    game.accumulated_ms += dt_ms.min(MAX_FRAME_MS);

    while game.accumulated_ms >= TICK_MS {
        game.accumulated_ms -= TICK_MS;
        step(game, rng, &mut events);

        if !game.is_running() {
            game.accumulated_ms = 0;
            break;
        }
    }

    events
}

/// One fixed physics step.
pub fn step<R: Rng>(game: &mut Game, rng: &mut R, events: &mut Vec<GameEvent>) {
    game.tick_count += 1;

    update_bird(game, events);
    if !game.is_running() {
        return;
    }

    maybe_spawn(game, TICK_MS as f64, rng, events);
    update_pipes(game, events);
}

/// Apply gravity, move the bird, and resolve floor and ceiling contact.
pub fn update_bird(game: &mut Game, events: &mut Vec<GameEvent>) {
    let bird = &mut game.bird;
    bird.velocity += game.world.gravity;
    bird.y += bird.velocity;

    if bird.bottom() > FLOOR_Y {
        bird.y = FLOOR_Y - bird.height / 2.0;
        game_over(game, DeathCause::Floor, events);
        return;
    }

    // Ceiling stops the bird but doesn't end the run.
    if bird.top() < 0.0 {
        bird.y = bird.height / 2.0;
        bird.velocity = 0.0;
    }
}

/// Accumulate `dt_ms` and spawn a pipe once the threshold is reached.
pub fn maybe_spawn<R: Rng>(
    game: &mut Game,
    dt_ms: f64,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    game.world.since_last_spawn_ms += dt_ms;
    if game.world.since_last_spawn_ms < game.world.next_spawn_ms {
        return;
    }

    let gap = game.world.pipe_gap;
    let top_height = spawn_top_height(gap, rng);
    game.pipes.push(Pipe::new(top_height, gap));

    game.world.since_last_spawn_ms = 0.0;
    game.world.next_spawn_ms = next_interval(&game.world, game.config.clamp_spawn_interval, rng);

    log::debug!(
        "pipe spawned: top={} gap={} next in {:.0}ms",
        top_height,
        gap,
        game.world.next_spawn_ms
    );
    events.push(GameEvent::PipeSpawned { top_height, gap });
}

/// Random top-segment height for a new pipe.
///
/// Drawn from `[PIPE_MIN_TOP, PIPE_MIN_TOP + WORLD_HEIGHT - gap - PIPE_SPAWN_MARGIN)`
/// in whole units, so both segments keep a visible size above the ground.
pub fn spawn_top_height<R: Rng>(gap: f64, rng: &mut R) -> f64 {
    let range = (WORLD_HEIGHT - gap - PIPE_SPAWN_MARGIN).max(0.0);
    (rng.gen::<f64>() * range).floor() + PIPE_MIN_TOP
}

/// Sample the time until the next spawn for the world's current level.
///
/// Higher levels push the base interval up and shrink the random variation.
/// The result is only held to `[min, max]` when `clamp` is set.
pub fn next_interval<R: Rng>(world: &World, clamp: bool, rng: &mut R) -> f64 {
    let level = world.level as f64;
    let variation =
        (BASE_INTERVAL_VARIATION_MS - level * VARIATION_STEP_MS).max(MIN_INTERVAL_VARIATION_MS);
    let base = world.min_pipe_interval_ms + (level - 1.0) * LEVEL_INTERVAL_STEP_MS;
    let interval = rng.gen::<f64>() * variation + base;

    if clamp {
        interval.clamp(world.min_pipe_interval_ms, world.max_pipe_interval_ms)
    } else {
        interval
    }
}

/// Scroll pipes, award points for pipes the bird has cleared, check
/// collisions, and drop pipes that are fully off the left edge.
pub fn update_pipes(game: &mut Game, events: &mut Vec<GameEvent>) {
    let bird_x = game.bird.x;

    for i in 0..game.pipes.len() {
        let speed = game.world.speed;
        let cleared = {
            let pipe = &mut game.pipes[i];
            pipe.x -= speed;
            if !pipe.passed && pipe.right_edge() < bird_x {
                pipe.passed = true;
                true
            } else {
                false
            }
        };

        if cleared {
            award_point(game, events);
        }

        if collides(&game.bird, &game.pipes[i]) {
            game_over(game, DeathCause::Pipe, events);
            break;
        }
    }

    game.pipes.retain(|p| p.right_edge() >= 0.0);
}

/// Whether the bird's box overlaps either segment of the pipe.
pub fn collides(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x = bird.right() > pipe.x && bird.left() < pipe.right_edge();
    overlaps_x && (bird.top() < pipe.top_height || bird.bottom() > pipe.bottom_y)
}

fn award_point(game: &mut Game, events: &mut Vec<GameEvent>) {
    game.world.score += 1;
    events.push(GameEvent::ScoreChanged {
        score: game.world.score,
    });

    if game.world.score % POINTS_PER_LEVEL == 0 {
        level_up(game, events);
    }
}

/// Raise the level: faster scroll and a smaller gap, down to the gap floor.
pub fn level_up(game: &mut Game, events: &mut Vec<GameEvent>) {
    let world = &mut game.world;
    world.level += 1;
    world.speed += game.config.level_speed_step;
    world.pipe_gap = (world.pipe_gap - game.config.level_gap_step).max(world.min_pipe_gap);

    log::info!(
        "level up: level={} speed={} gap={}",
        world.level,
        world.speed,
        world.pipe_gap
    );
    events.push(GameEvent::LevelUp {
        level: world.level,
        speed: world.speed,
        gap: world.pipe_gap,
    });
}

/// End the run. Only the first call per run has any effect.
pub fn game_over(game: &mut Game, cause: DeathCause, events: &mut Vec<GameEvent>) {
    if game.phase != Phase::Running {
        return;
    }
    game.phase = Phase::GameOver;

    log::info!(
        "game over ({:?}): score={} level={}",
        cause,
        game.world.score,
        game.world.level
    );
    events.push(GameEvent::GameOver {
        score: game.world.score,
        level: game.world.level,
        cause,
    });
}
