//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field has a default, so a partial or empty file is valid.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::subtitles::{SyncConfig, DEFAULT_FRAME_RATE};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Input and output files.
    #[serde(default)]
    pub paths: PathSettings,

    /// Reference caption and frame rate.
    #[serde(default)]
    pub timing: TimingSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), String> {
        let fps = self.timing.frame_rate;
        if !(fps.is_finite() && fps > 0.0) {
            return Err(format!("timing.frame_rate must be positive, got {}", fps));
        }
        if self.timing.reference_line == 0 {
            return Err("timing.reference_line must be 1 or greater".to_string());
        }
        Ok(())
    }

    /// Sync settings for the retiming pipeline.
    pub fn sync_config(&self) -> SyncConfig {
        SyncConfig::new(self.timing.reference_line, self.timing.frame_rate)
    }
}

/// Input and output file paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Subtitle file to read.
    #[serde(default = "default_input")]
    pub input: String,

    /// Subtitle file to write.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_input() -> String {
    "input.srt".to_string()
}

fn default_output() -> String {
    "output.srt".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

/// Timing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Frame rate for `HH:MM:SS:FF` timecodes.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    /// Caption to anchor the offset on when none is given.
    #[serde(default = "default_reference_line")]
    pub reference_line: u64,
}

fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

fn default_reference_line() -> u64 {
    1
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            reference_line: default_reference_line(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level (RUST_LOG overrides it).
    #[serde(default)]
    pub level: LogLevel,
}
