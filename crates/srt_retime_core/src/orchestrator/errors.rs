//! Error types for the retiming pipeline.
//!
//! Each variant names the stage that failed and carries the underlying
//! subtitle or sync error.

use thiserror::Error;

use crate::subtitles::{SubtitleError, SyncError};

/// Pipeline error with stage context.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input file missing or unreadable.
    #[error("Cannot read input: {0}")]
    InputAccess(#[source] SubtitleError),

    /// Offset could not be computed (malformed timecode, zero offset, ...).
    #[error("Cannot compute offset: {0}")]
    Offset(#[source] SyncError),

    /// A timing line could not be shifted.
    #[error("Cannot retime: {0}")]
    Retime(#[source] SyncError),

    /// Output path unwritable.
    #[error("Cannot write output: {0}")]
    OutputAccess(#[source] SubtitleError),
}

impl PipelineError {
    /// Name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InputAccess(_) => "read",
            Self::Offset(_) => "offset",
            Self::Retime(_) => "retime",
            Self::OutputAccess(_) => "write",
        }
    }

    /// Whether the run stopped because there was nothing to shift.
    pub fn is_zero_offset(&self) -> bool {
        matches!(self, Self::Offset(SyncError::ZeroOffset { .. }))
    }

    /// Whether the run stopped on an unparseable timecode.
    pub fn is_malformed_timecode(&self) -> bool {
        matches!(
            self,
            Self::Offset(SyncError::Timecode(_))
                | Self::Retime(SyncError::MalformedTimeRange { .. })
        )
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
