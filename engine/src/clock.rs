//! The one-second tick source.

use std::time::{Duration, Instant};

/// Capability the session uses to control its repeating one-second tick.
///
/// Arming while armed restarts the schedule from now. Starting a phase
/// always cancels before arming, so at most one schedule is ever
/// outstanding.
pub trait ClockSource {
    /// Begin (or restart) the repeating schedule at the current moment.
    fn arm(&mut self);

    /// Stop the schedule and discard any partial second.
    fn cancel(&mut self);
}

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Largest backlog honored tick-for-tick before collapsing to one.
const MAX_CATCHUP: Duration = Duration::from_secs(5);

/// Production clock: derives whole-second ticks from the frame loop's
/// monotonic now.
///
/// The frame loop calls [`FrameClock::poll_one`] until it returns false;
/// consuming one tick at a time lets a phase transition restart the
/// schedule mid-burst, which drops the rest of the backlog exactly like
/// tearing down and re-creating an interval timer. A gap beyond
/// [`MAX_CATCHUP`] (terminal suspended, machine asleep) collapses to a
/// single tick and the schedule resyncs, so a sleeping kiosk does not
/// fast-forward through many rounds.
#[derive(Debug)]
pub struct FrameClock {
    armed: bool,
    last: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            armed: false,
            last: Instant::now(),
        }
    }

    /// Consume one pending tick at `now`, if any. Returns false while
    /// cancelled or until a full second has elapsed.
    pub fn poll_one(&mut self, now: Instant) -> bool {
        if !self.armed {
            return false;
        }
        let elapsed = now.duration_since(self.last);
        if elapsed >= MAX_CATCHUP {
            self.last = now;
            return true;
        }
        if elapsed >= TICK_PERIOD {
            self.last += TICK_PERIOD;
            return true;
        }
        false
    }
}

impl ClockSource for FrameClock {
    fn arm(&mut self) {
        self.armed = true;
        self.last = Instant::now();
    }

    fn cancel(&mut self) {
        self.armed = false;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
