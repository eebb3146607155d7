//! Sound cues requested by the game. Playback is fire-and-forget.

use std::io::{self, Write};

/// A sound the game asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    LevelUp,
    Hit,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::LevelUp => "level up",
            Cue::Hit => "hit",
        }
    }
}

/// Anything that can play a cue. Implementations must not block or fail.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Records cues in the log instead of playing them.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: Cue) {
        log::info!("playing {} sound", cue.name());
    }
}

/// Rings the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: Cue) {
        log::debug!("bell for {} cue", cue.name());
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}

/// Keeps every cue it was asked to play. Useful for checking what a run
/// would have sounded like.
#[derive(Debug, Default)]
pub struct CueRecorder {
    pub played: Vec<Cue>,
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut sink = CueRecorder::default();
        sink.play(Cue::LevelUp);
        sink.play(Cue::Hit);
        assert_eq!(sink.played, vec![Cue::LevelUp, Cue::Hit]);
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::LevelUp.name(), "level up");
        assert_eq!(Cue::Hit.name(), "hit");
    }
}
