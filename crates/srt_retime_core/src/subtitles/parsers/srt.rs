//! SRT subtitle parser.
//!
//! Parses SubRip (.srt) subtitle files into classified lines.
//!
//! # Format Overview
//!
//! SRT files consist of sequential entries:
//! ```text
//! 1
//! 00:01:19,111 --> 00:01:20,646
//! That's the cleanup crew
//!
//! 2
//! 00:01:20,679 --> 00:01:22,647
//! up on the track,
//! and that's a lot of racers
//! ```
//!
//! Each entry has:
//! - Index number (renumbered on write)
//! - Timing line: `start --> end`
//! - One or more lines of text
//! - Blank line separator
//!
//! Parsing never fails. Anything that is not a number line, timing line or
//! blank line is kept as text and written back untouched. Line kinds depend
//! on position: a `-->` or a bare number inside dialogue is text.

use crate::subtitles::timecode::detect_notation;
use crate::subtitles::types::{LineEnding, LineKind, SrtDocument, SrtLine};

/// Separator between start and end on a timing line.
pub const TIME_SEPARATOR: &str = " --> ";

const BOM: char = '\u{feff}';

/// Parse SRT content into an `SrtDocument`.
///
/// # Arguments
/// * `content` - The raw SRT file content as a string.
pub fn parse_srt(content: &str) -> SrtDocument {
    let (content, has_bom) = match content.strip_prefix(BOM) {
        Some(rest) => (rest, true),
        None => (content, false),
    };

    let raw = split_lines(content);
    let mut lines: Vec<SrtLine> = Vec::with_capacity(raw.len());

    for (i, &(text, ending)) in raw.iter().enumerate() {
        let next = raw.get(i + 1).map(|&(t, _)| t);
        let kind = classify_line(text, lines.last(), next);
        lines.push(SrtLine::new(kind, text, ending));
    }

    tracing::debug!(
        "Parsed {} lines ({} caption numbers)",
        lines.len(),
        lines.iter().filter(|l| l.is_index()).count()
    );

    SrtDocument { lines, has_bom }
}

/// Split text into lines, remembering each line's terminator.
///
/// A trailing newline does not produce an extra empty line, so joining the
/// lines back with their terminators reproduces the input exactly.
fn split_lines(content: &str) -> Vec<(&str, LineEnding)> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find('\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let (line, ending) = match line.strip_suffix('\r') {
                    Some(stripped) => (stripped, LineEnding::CrLf),
                    None => (line, LineEnding::Lf),
                };
                lines.push((line, ending));
                rest = &rest[pos + 1..];
            }
            None => {
                lines.push((rest, LineEnding::None));
                rest = "";
            }
        }
    }

    lines
}

/// Classify one line given its neighbours.
///
/// A line opens a block when it is the first line or follows a blank or
/// number line. Only such lines can be timing lines, so `a --> b` inside
/// dialogue stays text. A bare integer is a caption number when it opens a
/// block or sits directly above a line that starts with a timecode.
fn classify_line(line: &str, prev: Option<&SrtLine>, next: Option<&str>) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    let opens_block = match prev {
        None => true,
        Some(p) => matches!(p.kind, LineKind::Blank | LineKind::Index(_)),
    };

    if opens_block {
        if let Some((start, end)) = split_time_range(line) {
            return LineKind::TimeRange {
                start: start.to_string(),
                end: end.to_string(),
            };
        }
    }

    if let Some(index) = parse_index(line) {
        let above_timing = next
            .and_then(split_time_range)
            .is_some_and(|(start, _)| detect_notation(start).is_some());
        if opens_block || above_timing {
            return LineKind::Index(index);
        }
    }

    LineKind::Text
}

/// Parse a caption number line.
///
/// The trimmed line must be a non-negative integer with nothing else on it,
/// so `1.` or `3.5` are text.
pub fn parse_index(line: &str) -> Option<u64> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Split a timing line into trimmed start and end text.
///
/// Anything after the end time (SRT position hints such as `X1:...`) is
/// dropped from the end text.
pub fn split_time_range(line: &str) -> Option<(&str, &str)> {
    let (start, end) = line.split_once(TIME_SEPARATOR)?;
    let end = end.split_whitespace().next().unwrap_or("");
    Some((start.trim(), end))
}

/// Text following the end time on a timing line, including its leading
/// whitespace. Empty for a plain `start --> end` line.
pub fn time_range_suffix(line: &str) -> &str {
    let Some((_, end)) = line.split_once(TIME_SEPARATOR) else {
        return "";
    };
    let end = end.trim_start();
    match end.find(char::is_whitespace) {
        Some(pos) => end[pos..].trim_end(),
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(doc: &SrtDocument) -> Vec<&LineKind> {
        doc.lines.iter().map(|l| &l.kind).collect()
    }

    #[test]
    fn test_parse_basic_srt() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello, world!\n\n2\n00:00:05,000 --> 00:00:08,000\nThis is a test.\nWith multiple lines.\n";

        let doc = parse_srt(content);

        assert_eq!(doc.lines.len(), 8);
        assert_eq!(doc.index_count(), 2);
        assert_eq!(
            kinds(&doc),
            vec![
                &LineKind::Index(1),
                &LineKind::TimeRange {
                    start: "00:00:01,000".into(),
                    end: "00:00:04,000".into()
                },
                &LineKind::Text,
                &LineKind::Blank,
                &LineKind::Index(2),
                &LineKind::TimeRange {
                    start: "00:00:05,000".into(),
                    end: "00:00:08,000".into()
                },
                &LineKind::Text,
                &LineKind::Text,
            ]
        );
    }

    #[test]
    fn test_line_endings_preserved() {
        let doc = parse_srt("1\r\n00:00:01,000 --> 00:00:02,000\r\nHi\nlast");

        assert_eq!(doc.lines[0].content, "1");
        assert_eq!(doc.lines[0].ending, LineEnding::CrLf);
        assert_eq!(doc.lines[1].ending, LineEnding::CrLf);
        assert_eq!(doc.lines[2].ending, LineEnding::Lf);
        assert_eq!(doc.lines[3].content, "last");
        assert_eq!(doc.lines[3].ending, LineEnding::None);
    }

    #[test]
    fn test_bom_stripped() {
        let doc = parse_srt("\u{feff}1\n00:00:01,000 --> 00:00:02,000\nHi\n");
        assert!(doc.has_bom);
        assert_eq!(doc.lines[0].kind, LineKind::Index(1));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1"), Some(1));
        assert_eq!(parse_index(" 42 "), Some(42));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index("1."), None);
        assert_eq!(parse_index("3.5"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("12 monkeys"), None);
        assert_eq!(parse_index(""), None);
    }

    #[test]
    fn test_numeric_dialogue_stays_text() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\nCount down from\n10\n\n2\n00:00:03,000 --> 00:00:04,000\n1.\n";
        let doc = parse_srt(content);

        assert_eq!(doc.lines[3].kind, LineKind::Text);
        assert_eq!(doc.lines[7].kind, LineKind::Text);
        assert_eq!(doc.index_count(), 2);
    }

    #[test]
    fn test_split_time_range() {
        assert_eq!(
            split_time_range("00:00:01,000 --> 00:00:02,000"),
            Some(("00:00:01,000", "00:00:02,000"))
        );
        assert_eq!(
            split_time_range("00:00:01,000 --> 00:00:02,000  X1:40 X2:600 Y1:20 Y2:50"),
            Some(("00:00:01,000", "00:00:02,000"))
        );
        assert_eq!(split_time_range("00:00:01,000->00:00:02,000"), None);
    }

    #[test]
    fn test_time_range_suffix() {
        assert_eq!(time_range_suffix("00:00:01,000 --> 00:00:02,000"), "");
        assert_eq!(time_range_suffix("00:00:01,000 --> 00:00:02,000 "), "");
        assert_eq!(
            time_range_suffix("00:00:01,000 --> 00:00:02,000  X1:40 X2:600"),
            "  X1:40 X2:600"
        );
    }

    #[test]
    fn test_arrow_in_dialogue_stays_text() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\nGo left --> then right\n10\nGo up --> down\n";
        let doc = parse_srt(content);

        assert_eq!(doc.lines[2].kind, LineKind::Text);
        assert_eq!(doc.lines[3].kind, LineKind::Text);
        assert_eq!(doc.lines[4].kind, LineKind::Text);
        assert_eq!(doc.index_count(), 1);
    }

    #[test]
    fn test_number_above_timing_after_text() {
        let doc = parse_srt("1\n00:00:01,000 --> 00:00:02,000\nA\n2\n00:00:03,000 --> 00:00:04,000\nB\n");

        assert_eq!(doc.lines[3].kind, LineKind::Index(2));
        assert!(matches!(doc.lines[4].kind, LineKind::TimeRange { .. }));
        assert_eq!(doc.captions().len(), 2);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let doc = parse_srt("1\n00:00:01,000 --> 00:00:02,000\nHi\n  \n");
        assert_eq!(doc.lines[3].kind, LineKind::Blank);
        assert_eq!(doc.lines[3].content, "  ");
    }
}
