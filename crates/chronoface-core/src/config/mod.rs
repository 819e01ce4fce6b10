mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_OFFSET_HOURS;
use crate::log::LogConfig;
use crate::schedule::Granularity;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for chronoface.
///
/// Loaded from `~/.config/chronoface/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Foreign time zone settings.
    pub clock: ClockConfig,
    /// How often the face is redrawn.
    pub refresh: RefreshConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Foreign time zone settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Whole hours added to UTC for the foreign time. Any integer is
    /// accepted and wrapped into a 24-hour day.
    pub offset_hours: i32,
}

/// Redraw schedule used by `chronoface watch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub granularity: Granularity,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            offset_hours: DEFAULT_OFFSET_HOURS,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// The clock offset is left as-is; the formatter normalises it.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 1024);
    }
}
