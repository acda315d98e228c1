//! The think/reveal riddle loop.

use rand::Rng;

use riddlecast_types::Puzzle;

use crate::clock::ClockSource;
use crate::cue::{Cue, CueSink};
use crate::generator;
use crate::state::Phase;

/// Phase durations in whole seconds.
///
/// `warn_seconds` is how far before the reveal the chime fires; callers keep
/// it strictly below `think_seconds` (config loading clamps it there).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerOptions {
    pub think_seconds: u32,
    pub gap_seconds: u32,
    pub warn_seconds: u32,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            think_seconds: 180,
            gap_seconds: 15,
            warn_seconds: 5,
        }
    }
}

/// One riddle session: the current puzzle, the phase, and the countdown.
///
/// The session owns no clock of its own; the caller drives [`Session::tick`]
/// once per elapsed second and passes the clock capability back in so phase
/// transitions can cancel and re-arm the schedule. Every transition is
/// synchronous: the tick that reaches zero is the tick that flips the phase.
#[derive(Debug)]
pub struct Session {
    timer: TimerOptions,
    example_count: usize,
    phase: Phase,
    remaining: u32,
    puzzle: Option<Puzzle>,
    rounds: u64,
}

impl Session {
    #[must_use]
    pub fn new(timer: TimerOptions, example_count: usize) -> Self {
        Self {
            timer,
            example_count,
            phase: Phase::Thinking,
            remaining: timer.think_seconds,
            puzzle: None,
            rounds: 0,
        }
    }

    /// Begin the first round, or abandon the current one for a fresh start.
    pub fn start(&mut self, rng: &mut impl Rng, clock: &mut impl ClockSource) {
        self.begin_round(rng, clock);
    }

    /// Advance one second. Does nothing until [`Session::start`] has
    /// produced a puzzle.
    pub fn tick(
        &mut self,
        rng: &mut impl Rng,
        clock: &mut impl ClockSource,
        cues: &mut impl CueSink,
    ) {
        if self.puzzle.is_none() {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);

        // The countdown is strictly decreasing inside a phase, so equality
        // holds exactly once per thinking window.
        if self.phase.is_thinking()
            && self.remaining == self.timer.warn_seconds
            && self.remaining > 0
        {
            cues.play(Cue::AlertChime);
        }

        if self.remaining == 0 {
            match self.phase {
                Phase::Thinking => self.reveal(clock),
                Phase::Revealed => self.begin_round(rng, clock),
            }
        }
    }

    /// Expose the answer card and start the gap countdown. Does nothing
    /// until a puzzle exists.
    pub fn reveal(&mut self, clock: &mut impl ClockSource) {
        let Some(puzzle) = self.puzzle.as_ref() else {
            return;
        };
        tracing::debug!(
            round = self.rounds,
            answer = puzzle.answer_value(),
            "answer revealed"
        );
        clock.cancel();
        self.phase = Phase::Revealed;
        self.remaining = self.timer.gap_seconds;
        clock.arm();
    }

    fn begin_round(&mut self, rng: &mut impl Rng, clock: &mut impl ClockSource) {
        clock.cancel();
        let puzzle = generator::generate(rng, self.example_count);
        self.rounds += 1;
        tracing::debug!(
            round = self.rounds,
            pattern = puzzle.pattern_id(),
            "starting riddle round"
        );
        self.puzzle = Some(puzzle);
        self.phase = Phase::Thinking;
        self.remaining = self.timer.think_seconds;
        clock.arm();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Rounds begun so far; each fresh puzzle increments this.
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.rounds
    }

    #[must_use]
    pub const fn timer(&self) -> TimerOptions {
        self.timer
    }
}
