//! Subtitle processing module.
//!
//! Provides SRT parsing, writing, timecode conversion and retiming.
//!
//! # Components
//!
//! - **timecode**: Clock (`HH:MM:SS,mmm`) and frame (`HH:MM:SS:FF`) timecodes
//! - **types**: Core data structures (SrtDocument, SrtLine, Caption, Timestamp)
//! - **parsers**: SRT text to classified lines
//! - **writers**: Classified lines back to SRT text
//! - **sync**: Offset calculation and retiming
//!
//! # Usage
//!
//! ```no_run
//! use srt_retime_core::subtitles::{
//!     calculate_offset, parse_file, retime_document, write_file, SyncConfig,
//! };
//!
//! let doc = parse_file("input.srt")?;
//! let config = SyncConfig::new(2, 24.0);
//! let calc = calculate_offset(&doc, &config, "00:00:49,111")?;
//! let outcome = retime_document(&doc, &config, calc.offset_ms)?;
//! write_file(&outcome.document, "output.srt")?;
//! # Ok::<(), srt_retime_core::subtitles::SubtitleError>(())
//! ```

mod error;
pub mod parsers;
pub mod sync;
pub mod timecode;
mod types;
pub mod writers;

use std::fs;
use std::path::Path;

// Re-export core types
pub use types::{Caption, LineEnding, LineKind, SrtDocument, SrtLine, Timestamp};

// Re-export errors
pub use error::{SubtitleError, SyncError, TimecodeError};

// Re-export parsers and writers
pub use parsers::parse_srt;
pub use writers::write_srt;

// Re-export timecode helpers
pub use timecode::{
    detect_notation, format_timecode, parse_timecode, TimecodeNotation, DEFAULT_FRAME_RATE,
};

// Re-export sync
pub use sync::{calculate_offset, retime_document, OffsetCalculation, RetimeOutcome, SyncConfig};

/// Parse a subtitle file from disk.
///
/// # Returns
/// * `Ok(SrtDocument)` - Parsed document.
/// * `Err(SubtitleError::ReadError)` - If the file is missing, unreadable
///   or not UTF-8.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SrtDocument, SubtitleError> {
    let path = path.as_ref();

    let content =
        fs::read_to_string(path).map_err(|e| SubtitleError::read(path.to_path_buf(), e))?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    Ok(parse_srt(&content))
}

/// Write a document to a file, replacing any existing file.
pub fn write_file(doc: &SrtDocument, path: impl AsRef<Path>) -> Result<(), SubtitleError> {
    let path = path.as_ref();

    let content = write_srt(doc);
    fs::write(path, &content).map_err(|e| SubtitleError::write(path.to_path_buf(), e))?;
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(())
}
