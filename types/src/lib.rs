//! Core domain types for Riddlecast.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod pattern;
mod puzzle;
mod settings;

pub use pattern::{Pattern, join_digits};
pub use puzzle::{Puzzle, WorkedPair};
pub use settings::{EnumKind, EnumParseError, UiOptions, ViewStyle};
