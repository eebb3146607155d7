//! Game tuning loaded from an optional JSON file.

use crate::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Tunable parameters for a run. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Velocity added per physics tick.
    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_impulse: f64,
    /// Starting scroll speed per tick.
    pub speed: f64,
    /// Starting vertical gap between pipe segments.
    pub pipe_gap: f64,
    /// Gap never shrinks below this.
    pub min_pipe_gap: f64,
    pub level_speed_step: f64,
    pub level_gap_step: f64,
    pub min_pipe_interval_ms: f64,
    pub max_pipe_interval_ms: f64,
    /// Clamp sampled spawn intervals into `[min, max]`.
    pub clamp_spawn_interval: bool,
    pub level_up_banner_ms: u64,
    /// Frame budget for the terminal loop.
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            speed: DEFAULT_SPEED,
            pipe_gap: DEFAULT_PIPE_GAP,
            min_pipe_gap: MIN_PIPE_GAP,
            level_speed_step: LEVEL_SPEED_STEP,
            level_gap_step: LEVEL_GAP_STEP,
            min_pipe_interval_ms: DEFAULT_MIN_PIPE_INTERVAL_MS,
            max_pipe_interval_ms: DEFAULT_MAX_PIPE_INTERVAL_MS,
            clamp_spawn_interval: false,
            level_up_banner_ms: LEVEL_UP_BANNER_MS,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl GameConfig {
    /// Reads a config from a JSON file.
    ///
    /// Returns an error if the file can't be read or isn't valid JSON for
    /// this struct. The result is validated before being returned.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config.validate())
    }

    /// Loads `config.json` from the platform config directory.
    ///
    /// A missing file or a file that fails to parse yields the defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Writes the config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Clamps values that would make pipe geometry or spawn timing invalid.
    pub fn validate(mut self) -> Self {
        // The gap has to leave room for both segments' minimum sizes.
        let max_gap = WORLD_HEIGHT - PIPE_SPAWN_MARGIN - 1.0;
        if self.pipe_gap <= 0.0 || self.pipe_gap > max_gap {
            log::warn!("pipe_gap {} out of range, using default", self.pipe_gap);
            self.pipe_gap = DEFAULT_PIPE_GAP;
        }
        if self.min_pipe_gap <= 0.0 || self.min_pipe_gap > self.pipe_gap {
            log::warn!(
                "min_pipe_gap {} out of range, clamping to {}",
                self.min_pipe_gap,
                self.pipe_gap.min(MIN_PIPE_GAP)
            );
            self.min_pipe_gap = self.pipe_gap.min(MIN_PIPE_GAP);
        }
        if self.level_gap_step < 0.0 {
            self.level_gap_step = 0.0;
        }
        if self.level_speed_step < 0.0 {
            self.level_speed_step = 0.0;
        }
        if self.speed <= 0.0 {
            self.speed = DEFAULT_SPEED;
        }
        if self.min_pipe_interval_ms <= 0.0 {
            self.min_pipe_interval_ms = DEFAULT_MIN_PIPE_INTERVAL_MS;
        }
        if self.max_pipe_interval_ms < self.min_pipe_interval_ms {
            self.max_pipe_interval_ms = self.min_pipe_interval_ms;
        }
        if self.frame_ms == 0 {
            self.frame_ms = DEFAULT_FRAME_MS;
        }
        self
    }
}

/// Platform directories for this game (config, data).
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "flappy")
}

/// `config.json` inside the platform config directory, if one exists.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
