//! Integration test: properties that hold on every frame of a run
//!
//! Long seeded runs, one with random flapping and one with an autopilot on
//! a wide-gap tuning that survives long enough to climb several levels.

use flappy::config::GameConfig;
use flappy::constants::*;
use flappy::game::{advance, jump, start, Game, GameEvent, Phase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Tuning with gaps wide enough that a simple autopilot never crashes.
fn wide_gap_config() -> GameConfig {
    GameConfig {
        pipe_gap: 480.0,
        min_pipe_gap: 460.0,
        ..Default::default()
    }
}

/// Flap whenever the falling bird's bottom would pass y = 420.
fn autopilot(game: &mut Game) {
    let bird = &game.bird;
    if bird.velocity >= 0.0 && bird.bottom() + bird.velocity + game.world.gravity > 420.0 {
        jump(game);
    }
}

#[derive(Default)]
struct Tally {
    scores: u32,
    level_ups: u32,
    game_overs: u32,
    spawns: u32,
}

/// Check per-frame invariants and count events.
fn check_frame(game: &Game, prev: &Game, events: &[GameEvent], tally: &mut Tally) {
    // Score never drops and moves one point per ScoreChanged.
    let score_events = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ScoreChanged { .. }))
        .count() as u32;
    assert!(game.world.score >= prev.world.score);
    assert_eq!(game.world.score - prev.world.score, score_events);
    tally.scores += score_events;

    // Levels only come from crossing multiples of ten.
    assert_eq!(game.world.level, 1 + game.world.score / POINTS_PER_LEVEL);

    // Gap is non-increasing and floored.
    assert!(game.world.pipe_gap <= prev.world.pipe_gap);
    assert!(game.world.pipe_gap >= game.world.min_pipe_gap);

    // Bird box stays between ceiling and floor.
    assert!(game.bird.top() >= 0.0, "bird above ceiling: {}", game.bird.y);
    assert!(game.bird.bottom() <= FLOOR_Y, "bird below floor: {}", game.bird.y);

    // Off-screen pipes are gone; every pipe keeps sane geometry.
    for pipe in &game.pipes {
        assert!(pipe.right_edge() >= 0.0);
        assert!(pipe.top_height >= PIPE_MIN_TOP);
        assert!(pipe.bottom_y < FLOOR_Y);
    }

    for event in events {
        match event {
            GameEvent::LevelUp { .. } => tally.level_ups += 1,
            GameEvent::GameOver { .. } => tally.game_overs += 1,
            GameEvent::PipeSpawned { .. } => tally.spawns += 1,
            _ => {}
        }
    }
}

#[test]
fn test_random_flapping_keeps_invariants() {
    for seed in 0..20u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut player = ChaCha8Rng::seed_from_u64(seed + 1000);
        let mut game = Game::default();
        start(&mut game, &mut rng);
        let mut tally = Tally::default();

        for _ in 0..20_000 {
            if player.gen_bool(0.08) {
                jump(&mut game);
            }
            let prev = game.clone();
            let events = advance(&mut game, TICK_MS, &mut rng);
            check_frame(&game, &prev, &events, &mut tally);
            if game.phase == Phase::GameOver {
                break;
            }
        }

        assert!(tally.game_overs <= 1, "seed {seed}: more than one game over");
    }
}

#[test]
fn test_autopilot_climbs_levels_once_per_crossing() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut game = Game::new(wide_gap_config());
    start(&mut game, &mut rng);
    let mut tally = Tally::default();

    // ~5 minutes of game time.
    for _ in 0..20_000 {
        autopilot(&mut game);
        let prev = game.clone();
        let events = advance(&mut game, TICK_MS, &mut rng);
        check_frame(&game, &prev, &events, &mut tally);
    }

    assert!(game.is_running(), "autopilot crashed at score {}", game.world.score);
    assert!(game.world.score >= 30, "score only {}", game.world.score);
    assert_eq!(tally.scores, game.world.score);
    assert_eq!(tally.level_ups, game.world.score / POINTS_PER_LEVEL);
    assert_eq!(tally.game_overs, 0);
    // Every scored pipe was spawned first.
    assert!(tally.spawns >= tally.scores);

    let expected_gap = (480.0 - LEVEL_GAP_STEP * (game.world.level - 1) as f64).max(460.0);
    assert_eq!(game.world.pipe_gap, expected_gap);
    let expected_speed = DEFAULT_SPEED + LEVEL_SPEED_STEP * (game.world.level - 1) as f64;
    assert!((game.world.speed - expected_speed).abs() < 1e-9);
}

#[test]
fn test_countdown_never_negative_and_resets_on_spawn() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut game = Game::new(wide_gap_config());
    start(&mut game, &mut rng);

    for _ in 0..2_000 {
        autopilot(&mut game);
        let before = game.world.next_spawn_in_ms();
        let events = advance(&mut game, TICK_MS, &mut rng);
        let after = game.world.next_spawn_in_ms();
        assert!(after >= 0.0);

        if events
            .iter()
            .any(|e| matches!(e, GameEvent::PipeSpawned { .. }))
        {
            assert!(after >= game.world.min_pipe_interval_ms);
        } else {
            assert!(after <= before);
        }
    }
}
