//! TOML-based session configuration.
//!
//! Interval durations and the default pomodoro target. These are fixed for
//! the lifetime of a session; nothing re-reads the file while a countdown
//! is running.
//!
//! Configuration is stored at `~/.config/tomata/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::IntervalKind;

/// Session configuration.
///
/// Serialized to/from TOML at `~/.config/tomata/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Work interval duration in minutes.
    #[serde(default = "default_work_min")]
    pub work_min: u64,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break_min")]
    pub short_break_min: u64,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break_min")]
    pub long_break_min: u64,
    /// Pomodoro target pre-filled into the target input.
    #[serde(default = "default_target")]
    pub default_target: u32,
}

fn default_work_min() -> u64 {
    25
}
fn default_short_break_min() -> u64 {
    5
}
fn default_long_break_min() -> u64 {
    15
}
fn default_target() -> u32 {
    4
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_min: default_work_min(),
            short_break_min: default_short_break_min(),
            long_break_min: default_long_break_min(),
            default_target: default_target(),
        }
    }
}

impl SessionConfig {
    /// Duration in seconds of an interval of the given kind.
    pub fn duration_secs(&self, kind: IntervalKind) -> u64 {
        let minutes = match kind {
            IntervalKind::Work => self.work_min,
            IntervalKind::ShortBreak => self.short_break_min,
            IntervalKind::LongBreak => self.long_break_min,
        };
        minutes.saturating_mul(60)
    }

    /// Default path: `~/.config/tomata/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tomata").join("config.toml"))
    }

    /// Load from the given path. A missing file yields the defaults; a
    /// present but malformed or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default path, falling back to defaults when no config
    /// directory can be resolved.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Write the configuration as TOML to the given path, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, text).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, minutes) in [
            ("work_min", self.work_min),
            ("short_break_min", self.short_break_min),
            ("long_break_min", self.long_break_min),
        ] {
            if minutes < 1 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "duration must be at least 1 minute".to_string(),
                });
            }
        }
        if self.default_target < 1 {
            return Err(ConfigError::InvalidValue {
                key: "default_target".to_string(),
                message: "target must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
