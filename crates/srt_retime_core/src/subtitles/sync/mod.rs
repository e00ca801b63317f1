//! Subtitle retiming.
//!
//! Retiming is two steps over a parsed document:
//!
//! 1. [`calculate_offset`] finds the reference caption and computes the
//!    signed delta between its current start and the requested new start.
//! 2. [`retime_document`] renumbers captions from 1 and shifts every timing
//!    line from the reference caption on by that delta.
//!
//! Both are pure functions; the orchestrator does the file I/O.

mod offset;
mod retime;

pub use offset::{calculate_offset, OffsetCalculation};
pub use retime::{retime_document, RetimeOutcome};

use crate::subtitles::error::SyncError;
use crate::subtitles::timecode::{validate_frame_rate, DEFAULT_FRAME_RATE};

/// Configuration for offset calculation and retiming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncConfig {
    /// 1-based caption number the offset is anchored on.
    pub reference: u64,
    /// Frame rate for `HH:MM:SS:FF` timecodes.
    pub frame_rate: f64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            reference: 1,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl SyncConfig {
    /// Create a config anchored on the given caption.
    pub fn new(reference: u64, frame_rate: f64) -> Self {
        Self {
            reference,
            frame_rate,
        }
    }

    /// Check the reference number and frame rate.
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.reference == 0 {
            return Err(SyncError::InvalidReference(self.reference));
        }
        validate_frame_rate(self.frame_rate)?;
        Ok(())
    }
}
