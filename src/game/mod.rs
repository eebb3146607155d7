//! The simulation step: bird physics, pipe spawning, scoring and levels.
//!
//! The player keeps a bird airborne with discrete jumps while pipe pairs
//! scroll in from the right edge. Passing a pipe scores a point, every ten
//! points raises the level, and touching a pipe or the floor ends the run.
//! All state changes are reported as [`GameEvent`]s so the HUD and audio
//! never reach into the simulation.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
