//! Audio cue seam between the session and whatever can make noise.

/// A sound the session wants played.
///
/// The core only triggers cues; producing sound is the sink's concern, and
/// playback failure never feeds back into timer or phase state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Background loop, started once on the first user interaction.
    AmbientStart,
    /// Warning chime near the end of the thinking window.
    AlertChime,
}

/// Capability for playing cues.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

/// Buffering sink: the session plays into this queue during a tick and the
/// frame loop drains it into the real sink afterward.
#[derive(Debug, Default)]
pub struct CueQueue {
    pending: Vec<Cue>,
}

impl CueQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending cues in trigger order, clearing the queue.
    pub fn take(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl CueSink for CueQueue {
    fn play(&mut self, cue: Cue) {
        self.pending.push(cue);
    }
}
