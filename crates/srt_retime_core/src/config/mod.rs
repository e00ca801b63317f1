//! Configuration management for srt-retime.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Defaults for every key, so the file is optional
//! - Atomic file writes (write to temp, then rename)
//!
//! # Example
//!
//! ```no_run
//! use srt_retime_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("srt-retime.toml");
//! config.load_or_default().unwrap();
//!
//! println!("Input: {}", config.settings().paths.input);
//!
//! config.settings_mut().timing.frame_rate = 25.0;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, PathSettings, Settings, TimingSettings};
