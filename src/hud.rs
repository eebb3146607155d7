//! Score, level and banner state driven by [`GameEvent`]s.
//!
//! The HUD never reads simulation internals to decide what to show; it
//! follows the event stream and forwards sound cues to an [`AudioSink`].

use crate::audio::{AudioSink, Cue};
use crate::game::{DeathCause, GameEvent};

/// Final numbers of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub level: u32,
    pub cause: DeathCause,
}

#[derive(Debug, Clone)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    /// Remaining time the level-up banner stays visible.
    pub level_up_ms: u64,
    pub banner_duration_ms: u64,
    /// Set when a run ends, cleared when the next one starts.
    pub summary: Option<RunSummary>,
    /// Best score seen this session.
    pub best_score: u32,
}

impl Hud {
    pub fn new(banner_duration_ms: u64) -> Self {
        Self {
            score: 0,
            level: 1,
            level_up_ms: 0,
            banner_duration_ms,
            summary: None,
            best_score: 0,
        }
    }

    /// Update displayed state from events and request sound cues.
    pub fn apply_events(&mut self, events: &[GameEvent], audio: &mut dyn AudioSink) {
        for event in events {
            match event {
                GameEvent::RunStarted => {
                    self.score = 0;
                    self.level = 1;
                    self.level_up_ms = 0;
                    self.summary = None;
                }
                GameEvent::PipeSpawned { .. } => {}
                GameEvent::ScoreChanged { score } => {
                    self.score = *score;
                }
                GameEvent::LevelUp { level, .. } => {
                    self.level = *level;
                    self.level_up_ms = self.banner_duration_ms;
                    audio.play(Cue::LevelUp);
                }
                GameEvent::GameOver {
                    score,
                    level,
                    cause,
                } => {
                    self.summary = Some(RunSummary {
                        score: *score,
                        level: *level,
                        cause: *cause,
                    });
                    self.best_score = self.best_score.max(*score);
                    audio.play(Cue::Hit);
                }
            }
        }
    }

    /// Count down transient indicators.
    pub fn tick(&mut self, dt_ms: u64) {
        self.level_up_ms = self.level_up_ms.saturating_sub(dt_ms);
    }

    pub fn show_level_up(&self) -> bool {
        self.level_up_ms > 0
    }

    pub fn score_text(&self) -> String {
        self.score.to_string()
    }

    pub fn level_text(&self) -> String {
        format!("Level: {}", self.level)
    }
}

/// Format the time until the next pipe, truncated to tenths of a second.
pub fn countdown_text(ms: f64) -> String {
    let tenths = (ms / 100.0).floor().max(0.0) as u64;
    format!("Next pipe in: {}.{}s", tenths / 10, tenths % 10)
}
