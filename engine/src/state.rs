//! Session phase types.

/// The two-phase display cycle.
///
/// # State Machine
/// ```text
/// ┌──────────────┐  think countdown hits 0  ┌──────────────┐
/// │ Thinking     │ ───────────────────────> │ Revealed     │
/// └──────────────┘                          └──────────────┘
///       ^                                          │
///       │  gap expires (fresh puzzle)              │
///       └──────────────────────────────────────────┘
/// ```
///
/// The question is visible and the answer hidden while `Thinking`; the
/// answer card is visible while `Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Thinking,
    Revealed,
}

impl Phase {
    #[must_use]
    pub const fn is_thinking(self) -> bool {
        matches!(self, Phase::Thinking)
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Phase::Revealed)
    }

    /// Caption shown above the countdown readout.
    #[must_use]
    pub const fn timer_label(self) -> &'static str {
        match self {
            Phase::Thinking => "Time left to think:",
            Phase::Revealed => "Next question in:",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;

    #[test]
    fn timer_labels_per_phase() {
        assert_eq!(Phase::Thinking.timer_label(), "Time left to think:");
        assert_eq!(Phase::Revealed.timer_label(), "Next question in:");
        assert!(Phase::Thinking.is_thinking());
        assert!(Phase::Revealed.is_revealed());
    }
}
