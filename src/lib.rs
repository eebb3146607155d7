//! Flappy - terminal arcade game library
//!
//! Exposes the simulation, configuration, HUD and audio seams so the
//! terminal binary, the headless simulator and the tests share one game.

pub mod audio;
pub mod config;
pub mod constants;
pub mod game;
pub mod hud;

pub use config::GameConfig;
pub use game::{Game, GameEvent, GameInput, Phase};
