//! Session engine for Riddlecast - puzzle generation, the think/reveal
//! state machine, and wall-clock scheduling.
//!
//! This crate owns all behavior without terminal dependencies. The front
//! end pumps [`App::tick`] once per frame and renders from the accessors;
//! nothing here draws, sleeps, or blocks.

mod app;
mod clock;
mod config;
mod cue;
mod generator;
mod session;
mod state;

pub use app::App;
pub use clock::{ClockSource, FrameClock};
pub use config::{ConfigError, RiddlecastConfig, config_path};
pub use cue::{Cue, CueQueue, CueSink};
pub use generator::{OPERAND_MAX, OPERAND_MIN, generate};
pub use session::{Session, TimerOptions};
pub use state::Phase;

// Re-export the domain types the front end renders from.
pub use riddlecast_types::{Puzzle, UiOptions, ViewStyle, WorkedPair};
