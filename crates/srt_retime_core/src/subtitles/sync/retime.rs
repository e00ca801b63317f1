//! Line rewriting and renumbering.

use crate::subtitles::error::SyncError;
use crate::subtitles::parsers::time_range_suffix;
use crate::subtitles::timecode::parse_timecode;
use crate::subtitles::types::{LineKind, SrtDocument, SrtLine, Timestamp};

use super::SyncConfig;

/// Retimed document plus counters for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct RetimeOutcome {
    /// The rewritten document.
    pub document: SrtDocument,
    /// Number of caption number lines written (the last number used).
    pub captions_renumbered: u64,
    /// Number of timing lines shifted.
    pub captions_shifted: usize,
}

/// Renumber captions from 1 and shift timing lines by `offset_ms`.
///
/// Shifting starts at the caption whose new number equals
/// `config.reference`; timing lines before it are copied unchanged. Every
/// other line is copied unchanged, keeping its original line ending.
///
/// # Errors
/// * `SyncError::MalformedTimeRange` - a timing line to shift does not parse.
/// * `SyncError::BeforeZero` - a shifted time would be negative.
pub fn retime_document(
    doc: &SrtDocument,
    config: &SyncConfig,
    offset_ms: i64,
) -> Result<RetimeOutcome, SyncError> {
    config.validate()?;

    let mut lines = Vec::with_capacity(doc.lines.len());
    let mut next_number: u64 = 1;
    let mut shifting = false;
    let mut shifted = 0;

    for (i, line) in doc.lines.iter().enumerate() {
        let line_no = i + 1;

        match &line.kind {
            LineKind::Index(_) => {
                lines.push(SrtLine::new(
                    LineKind::Index(next_number),
                    next_number.to_string(),
                    line.ending,
                ));
                next_number += 1;
                if !shifting && next_number > config.reference {
                    tracing::debug!("Shifting from caption {} (line {})", next_number - 1, line_no);
                    shifting = true;
                }
            }
            LineKind::TimeRange { start, end } if shifting => {
                let new_start = shift(start, line, line_no, config, offset_ms)?;
                let new_end = shift(end, line, line_no, config, offset_ms)?;
                let start = new_start.to_string();
                let end = new_end.to_string();
                let content = format!(
                    "{} --> {}{}",
                    start,
                    end,
                    time_range_suffix(&line.content)
                );
                lines.push(SrtLine::new(
                    LineKind::TimeRange { start, end },
                    content,
                    line.ending,
                ));
                shifted += 1;
            }
            _ => lines.push(line.clone()),
        }
    }

    let captions_renumbered = next_number - 1;
    tracing::info!(
        "Renumbered {} captions, shifted {} by {:+}ms",
        captions_renumbered,
        shifted,
        offset_ms
    );

    Ok(RetimeOutcome {
        document: SrtDocument {
            lines,
            has_bom: doc.has_bom,
        },
        captions_renumbered,
        captions_shifted: shifted,
    })
}

fn shift(
    value: &str,
    line: &SrtLine,
    line_no: usize,
    config: &SyncConfig,
    offset_ms: i64,
) -> Result<Timestamp, SyncError> {
    let ts = parse_timecode(value, config.frame_rate)
        .map_err(|_| SyncError::malformed_time_range(line_no, &line.content))?;

    ts.checked_shift(offset_ms).ok_or_else(|| SyncError::BeforeZero {
        line: line_no,
        value: value.to_string(),
        offset_ms,
    })
}
