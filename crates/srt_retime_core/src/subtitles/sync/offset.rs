//! Offset calculation.
//!
//! The offset is the difference between the requested new start time and the
//! current start time of the reference caption. It is computed once and
//! applied unchanged to every later timing line.

use serde::Serialize;

use crate::subtitles::error::SyncError;
use crate::subtitles::timecode::{detect_notation, parse_timecode};
use crate::subtitles::types::{SrtDocument, Timestamp};

use super::SyncConfig;

/// Result of locating the reference caption and computing the offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetCalculation {
    /// Caption number that was asked for.
    pub reference: u64,
    /// Caption number the offset was anchored on. Equal to `reference`
    /// unless that caption had no timing line.
    pub anchor_caption: u64,
    /// 1-based line number of the anchor's timing line.
    pub anchor_line: usize,
    /// Start of the anchor caption before retiming.
    pub old_start: Timestamp,
    /// Requested start of the anchor caption.
    pub new_start: Timestamp,
    /// `new_start - old_start` in milliseconds.
    pub offset_ms: i64,
}

/// Compute the offset that moves the reference caption to `new_time`.
///
/// `new_time` and the caption's current start may each be in clock or frame
/// notation.
///
/// # Errors
/// * `SyncError::InvalidReference` - reference is 0 (or frame rate invalid).
/// * `SyncError::Timecode` - `new_time` or the caption start is malformed.
/// * `SyncError::ReferenceNotFound` - no caption at or after the reference.
/// * `SyncError::ZeroOffset` - the caption already starts at `new_time`.
pub fn calculate_offset(
    doc: &SrtDocument,
    config: &SyncConfig,
    new_time: &str,
) -> Result<OffsetCalculation, SyncError> {
    config.validate()?;

    let new_start = parse_timecode(new_time, config.frame_rate)?;
    if let Some(notation) = detect_notation(new_time) {
        tracing::debug!(
            "New time '{}' read as {} timecode ({} fps) = {}",
            new_time,
            notation.name(),
            config.frame_rate,
            new_start
        );
    }

    let anchor = doc
        .captions()
        .into_iter()
        .find(|c| c.number >= config.reference)
        .ok_or(SyncError::ReferenceNotFound(config.reference))?;

    if anchor.number != config.reference {
        tracing::warn!(
            "Caption {} has no timing line, anchoring on caption {}",
            config.reference,
            anchor.number
        );
    }

    let old_start = parse_timecode(&anchor.start, config.frame_rate)?;
    let offset_ms = new_start.offset_from(old_start);

    tracing::info!(
        "Caption {}: {} -> {} (offset {:+}ms)",
        anchor.number,
        old_start,
        new_start,
        offset_ms
    );

    if offset_ms == 0 {
        return Err(SyncError::ZeroOffset {
            reference: anchor.number,
            time: old_start.to_string(),
        });
    }

    Ok(OffsetCalculation {
        reference: config.reference,
        anchor_caption: anchor.number,
        anchor_line: anchor.line,
        old_start,
        new_start,
        offset_ms,
    })
}
