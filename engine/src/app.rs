//! Top-level application state driven by the terminal front end.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use riddlecast_types::{UiOptions, ViewStyle};

use crate::clock::FrameClock;
use crate::config::RiddlecastConfig;
use crate::cue::{Cue, CueQueue, CueSink};
use crate::session::Session;

/// Everything the render loop needs: the riddle session, the wall-clock
/// schedule that drives it, and presentation options resolved from config.
pub struct App {
    session: Session,
    clock: FrameClock,
    rng: StdRng,
    cues: CueQueue,
    options: UiOptions,
    view: ViewStyle,
    audio_enabled: bool,
    /// Animation counter for pulsing UI accents (~10Hz).
    tick: usize,
    last_ui_tick: Instant,
    ambient_started: bool,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &RiddlecastConfig, view: ViewStyle) -> Self {
        Self::with_rng(config, view, StdRng::from_os_rng())
    }

    /// Deterministic variant for tests; the seed fixes the puzzle sequence.
    #[must_use]
    pub fn with_seed(config: &RiddlecastConfig, view: ViewStyle, seed: u64) -> Self {
        Self::with_rng(config, view, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &RiddlecastConfig, view: ViewStyle, rng: StdRng) -> Self {
        Self {
            session: Session::new(config.timer_options(), view.example_count()),
            clock: FrameClock::new(),
            rng,
            cues: CueQueue::new(),
            options: config.ui_options(),
            view,
            audio_enabled: config.audio_enabled(),
            tick: 0,
            last_ui_tick: Instant::now(),
            ambient_started: false,
            should_quit: false,
        }
    }

    /// Generate the first puzzle and arm the countdown.
    pub fn start(&mut self) {
        self.session.start(&mut self.rng, &mut self.clock);
    }

    /// Advance time. Due countdown seconds are consumed one at a time so
    /// that a phase transition mid-burst re-arms the schedule and the rest
    /// of the backlog is dropped rather than replayed into the new phase.
    pub fn tick(&mut self) {
        let now = Instant::now();

        while self.clock.poll_one(now) {
            self.session
                .tick(&mut self.rng, &mut self.clock, &mut self.cues);
        }

        // Animation cadence (~10Hz), independent of render FPS.
        if now.duration_since(self.last_ui_tick) >= Duration::from_millis(100) {
            self.last_ui_tick = now;
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Record a user interaction. The first one queues the ambient loop cue;
    /// later ones do nothing.
    pub fn note_interaction(&mut self) {
        if !self.ambient_started {
            self.ambient_started = true;
            self.cues.play(Cue::AmbientStart);
        }
    }

    /// Drain sound cues queued since the last call.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        self.cues.take()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn view_style(&self) -> ViewStyle {
        self.view
    }

    #[must_use]
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }
}
