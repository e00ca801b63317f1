//! Subtitle error types.

use std::path::PathBuf;

/// Errors that can occur during subtitle file operations.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// Failed to read subtitle file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write subtitle file.
    #[error("Failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Sync error.
    #[error("Sync error: {0}")]
    SyncError(#[from] SyncError),
}

/// Errors that can occur while parsing a single timecode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimecodeError {
    /// Matches neither `HH:MM:SS,mmm` nor `HH:MM:SS:FF`.
    #[error("Malformed timecode '{value}': expected HH:MM:SS,mmm or HH:MM:SS:FF")]
    Malformed { value: String },

    /// Well-formed, but the value does not fit in a timestamp.
    #[error("Timecode '{value}' is out of range at {fps} fps")]
    OutOfRange { value: String, fps: f64 },

    /// Frame rate is zero, negative, or not finite.
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f64),
}

/// Errors that can occur during offset calculation and retiming.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A timecode could not be parsed.
    #[error(transparent)]
    Timecode(#[from] TimecodeError),

    /// The new time equals the reference caption's current start.
    #[error("No difference from current time at caption {reference} ({time})")]
    ZeroOffset { reference: u64, time: String },

    /// Caption indices are 1-based.
    #[error("Invalid reference caption {0}: caption numbers start at 1")]
    InvalidReference(u64),

    /// No caption with a time range at or after the reference.
    #[error("No caption found at or after caption {0}")]
    ReferenceNotFound(u64),

    /// A time range line inside the shifted region could not be parsed.
    #[error("Invalid time range at line {line}: '{value}'")]
    MalformedTimeRange { line: usize, value: String },

    /// Shifting would move a timestamp before 00:00:00,000.
    #[error("Shifting '{value}' at line {line} by {offset_ms}ms would go below 00:00:00,000")]
    BeforeZero {
        line: usize,
        value: String,
        offset_ms: i64,
    },
}

impl SubtitleError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl TimecodeError {
    /// Create a malformed timecode error.
    pub fn malformed(value: impl Into<String>) -> Self {
        Self::Malformed {
            value: value.into(),
        }
    }
}

impl SyncError {
    /// Create a malformed time range error.
    pub fn malformed_time_range(line: usize, value: impl Into<String>) -> Self {
        Self::MalformedTimeRange {
            line,
            value: value.into(),
        }
    }
}
