//! Presentation settings shared by the engine and the terminal front end.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    ViewStyle,
}

impl EnumKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnumKind::ViewStyle => "view style",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{raw}'; expected one of: {expected:?}")]
pub struct EnumParseError {
    kind: EnumKind,
    raw: String,
    expected: &'static [&'static str],
}

impl EnumParseError {
    #[must_use]
    pub fn new(kind: EnumKind, raw: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            raw: raw.into(),
            expected,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EnumKind {
        self.kind
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

const VIEW_STYLE_PARSE_VALUES: &[&str] = &["compact", "split"];

/// How the puzzle card presents a round.
///
/// `Compact` is the kiosk layout: three worked examples above the question.
/// `Split` shows one given line plus the question and prints the full
/// explanation sentence on reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStyle {
    #[default]
    Compact,
    Split,
}

impl ViewStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewStyle::Compact => "compact",
            ViewStyle::Split => "split",
        }
    }

    /// Worked example lines shown above the question pair.
    #[must_use]
    pub const fn example_count(self) -> usize {
        match self {
            ViewStyle::Compact => 3,
            ViewStyle::Split => 1,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(ViewStyle::Compact),
            "split" => Ok(ViewStyle::Split),
            other => Err(EnumParseError::new(
                EnumKind::ViewStyle,
                other,
                VIEW_STYLE_PARSE_VALUES,
            )),
        }
    }
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation switches threaded through the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}
