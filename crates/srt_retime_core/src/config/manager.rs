//! Config manager for loading and saving settings.
//!
//! - Missing file means defaults (`load_or_default`)
//! - Atomic writes (write to temp file, then rename)
//! - Validation on load

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Settings;

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result alias for settings file operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the settings file.
pub struct ConfigManager {
    /// Settings file location.
    config_path: PathBuf,
    /// In-memory settings, possibly changed since load.
    settings: Settings,
}

impl ConfigManager {
    /// Manager for the file at `config_path`, starting from defaults.
    ///
    /// Nothing is read until `load()` or `load_or_default()`.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Settings file location.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current settings, for command-line overrides.
    ///
    /// Not persisted until `save()`.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Read and validate the settings file.
    ///
    /// A missing file is `ConfigError::NotFound`.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = parse_and_validate(&content)?;
        tracing::debug!("Loaded config from {}", self.config_path.display());
        Ok(())
    }

    /// Load config from file, keeping defaults if it doesn't exist.
    ///
    /// Returns whether a file was found.
    pub fn load_or_default(&mut self) -> ConfigResult<bool> {
        match self.load() {
            Ok(()) => Ok(true),
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                self.settings = Settings::default();
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Validate and write the settings file.
    pub fn save(&self) -> ConfigResult<()> {
        self.settings.validate().map_err(ConfigError::Invalid)?;
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        tracing::debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    /// Render every section with a comment header.
    fn generate_config_with_comments(&self) -> ConfigResult<String> {
        let mut output = String::new();

        output.push_str("# srt-retime configuration\n");
        output.push_str("# Command-line options override these values.\n\n");

        push_section(
            &mut output,
            "Files to read and write",
            "paths",
            &toml::to_string_pretty(&self.settings.paths)?,
        );
        output.push('\n');
        push_section(
            &mut output,
            "Reference caption and frame rate for HH:MM:SS:FF timecodes",
            "timing",
            &toml::to_string_pretty(&self.settings.timing)?,
        );
        output.push('\n');
        push_section(
            &mut output,
            "Log level: trace, debug, info, warn, error (RUST_LOG overrides)",
            "logging",
            &toml::to_string_pretty(&self.settings.logging)?,
        );

        Ok(output)
    }

    /// Replace the settings file via a sibling temp file and a rename.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Temp file in same directory so the rename stays on one filesystem
        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}

fn parse_and_validate(content: &str) -> ConfigResult<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate().map_err(ConfigError::Invalid)?;
    Ok(settings)
}

fn push_section(output: &mut String, comment: &str, table: &str, body: &str) {
    output.push_str(&format!("# {}\n[{}]\n", comment, table));
    for line in body.lines() {
        output.push_str(line);
        output.push('\n');
    }
}
