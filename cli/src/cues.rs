//! Terminal-side playback for session cues.

use std::io::{Write, stdout};

use tracing::debug;

use riddlecast_engine::{Cue, CueSink};

/// Plays cues on the controlling terminal.
///
/// The chime is the BEL control byte; terminals map it to a beep or a visual
/// flash depending on user settings. Ambient audio has no terminal analogue,
/// so its start marker is only logged. A failed write never reaches the
/// session.
pub struct TerminalCues {
    enabled: bool,
}

impl TerminalCues {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl CueSink for TerminalCues {
    fn play(&mut self, cue: Cue) {
        if !self.enabled {
            debug!(?cue, "Audio disabled, dropping cue");
            return;
        }
        match cue {
            Cue::AlertChime => {
                // BEL is non-printing, so ringing it mid-frame cannot corrupt
                // the alternate screen.
                let mut out = stdout();
                if let Err(err) = out.write_all(b"\x07").and_then(|()| out.flush()) {
                    debug!("Failed to ring the terminal bell: {err}");
                }
            }
            Cue::AmbientStart => debug!("Ambient loop unlocked by first keypress"),
        }
    }
}
