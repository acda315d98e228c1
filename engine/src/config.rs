use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use riddlecast_types::{UiOptions, ViewStyle};

use crate::session::TimerOptions;

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

/// On-disk configuration, read once at startup from
/// `~/.riddlecast/config.toml`. Every section is optional; defaults apply
/// wherever the file is silent.
#[derive(Debug, Default, Deserialize)]
pub struct RiddlecastConfig {
    pub timer: Option<TimerConfig>,
    pub ui: Option<UiConfig>,
    pub audio: Option<AudioConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Phase durations, in whole seconds.
///
/// ```toml
/// [timer]
/// think_seconds = 180
/// gap_seconds = 15
/// warn_seconds = 5
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TimerConfig {
    pub think_seconds: Option<u32>,
    pub gap_seconds: Option<u32>,
    pub warn_seconds: Option<u32>,
}

/// Presentation settings.
///
/// ```toml
/// [ui]
/// view = "compact"
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Puzzle card layout: "compact" or "split".
    pub view: Option<String>,
    /// Use ASCII-only glyphs for borders and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the question-line pulse and other motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Cue playback.
///
/// ```toml
/// [audio]
/// enabled = true
/// ```
#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl RiddlecastConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_at(&path)
    }

    fn load_at(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Timer durations with nonsense clamped away: phases last at least one
    /// second and the warn threshold stays strictly inside the thinking
    /// window, so the chime always lands before the reveal.
    #[must_use]
    pub fn timer_options(&self) -> TimerOptions {
        let defaults = TimerOptions::default();
        let timer = match self.timer.as_ref() {
            Some(timer) => timer,
            None => return defaults,
        };

        let mut think = timer.think_seconds.unwrap_or(defaults.think_seconds);
        if think == 0 {
            tracing::warn!("think_seconds must be at least 1; using 1");
            think = 1;
        }

        let mut gap = timer.gap_seconds.unwrap_or(defaults.gap_seconds);
        if gap == 0 {
            tracing::warn!("gap_seconds must be at least 1; using 1");
            gap = 1;
        }

        let mut warn = timer.warn_seconds.unwrap_or(defaults.warn_seconds);
        if warn >= think {
            let clamped = think - 1;
            tracing::warn!(
                warn,
                think,
                clamped,
                "warn_seconds must be below think_seconds; clamping"
            );
            warn = clamped;
        }

        TimerOptions {
            think_seconds: think,
            gap_seconds: gap,
            warn_seconds: warn,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui.as_ref().map_or_else(UiOptions::default, |ui| UiOptions {
            ascii_only: ui.ascii_only,
            high_contrast: ui.high_contrast,
            reduced_motion: ui.reduced_motion,
        })
    }

    /// View style from the config, if present and valid. Invalid values warn
    /// and yield `None` so the caller's fallback chain applies.
    #[must_use]
    pub fn view_style(&self) -> Option<ViewStyle> {
        let raw = self.ui.as_ref()?.view.as_deref()?;
        match ViewStyle::parse(raw) {
            Ok(style) => Some(style),
            Err(err) => {
                tracing::warn!("Ignoring invalid [ui] view in config: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn audio_enabled(&self) -> bool {
        self.audio.as_ref().is_none_or(|audio| audio.enabled)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".riddlecast").join("config.toml"))
}
