//! Core subtitle types.
//!
//! Timing values are integer milliseconds. The document keeps every physical
//! line together with its original terminator so lines that are not retimed
//! can be written back byte-for-byte.

use std::fmt;

use serde::Serialize;

use super::timecode::{format_timecode, parse_timecode};
use crate::subtitles::error::TimecodeError;

/// A point in time, in whole milliseconds since 00:00:00,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// 00:00:00,000
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since 00:00:00,000.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Shift by a signed offset.
    ///
    /// Returns `None` if the result would be negative or overflow.
    pub fn checked_shift(&self, offset_ms: i64) -> Option<Self> {
        if offset_ms >= 0 {
            self.0.checked_add(offset_ms as u64).map(Self)
        } else {
            self.0.checked_sub(offset_ms.unsigned_abs()).map(Self)
        }
    }

    /// Signed difference `self - earlier` in milliseconds.
    pub fn offset_from(&self, earlier: Timestamp) -> i64 {
        self.0 as i64 - earlier.0 as i64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timecode(*self))
    }
}

/// Terminator that followed a line in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
    /// Last line of a file without a trailing newline.
    None,
}

impl LineEnding {
    /// The terminator as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }
}

/// What a physical line of an SRT file represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Caption number line, holding the number as written in the source.
    Index(u64),
    /// `start --> end` line, holding the raw start and end text.
    TimeRange { start: String, end: String },
    /// Caption text (dialogue, formatting tags, anything else).
    Text,
    /// Empty or whitespace-only separator.
    Blank,
}

/// One physical line of an SRT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrtLine {
    /// Classification from the parse pass.
    pub kind: LineKind,
    /// Line content without its terminator.
    pub content: String,
    /// Original terminator.
    pub ending: LineEnding,
}

impl SrtLine {
    /// Create a line.
    pub fn new(kind: LineKind, content: impl Into<String>, ending: LineEnding) -> Self {
        Self {
            kind,
            content: content.into(),
            ending,
        }
    }

    /// Whether this is a caption number line.
    pub fn is_index(&self) -> bool {
        matches!(self.kind, LineKind::Index(_))
    }
}

/// A parsed SRT file as an ordered sequence of classified lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrtDocument {
    /// All lines in source order.
    pub lines: Vec<SrtLine>,
    /// Source started with a UTF-8 byte order mark.
    pub has_bom: bool,
}

impl SrtDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of caption number lines.
    pub fn index_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_index()).count()
    }

    /// Group lines into caption records.
    ///
    /// A caption starts at a number line that is immediately followed by a
    /// time range line; its text runs until the next blank line or the next
    /// number line. `Caption::number` is the caption's position among all
    /// number lines, which is the number it gets on output.
    pub fn captions(&self) -> Vec<Caption> {
        let mut captions = Vec::new();
        let mut ordinal = 0u64;
        let mut i = 0;

        while i < self.lines.len() {
            let line = &self.lines[i];
            let LineKind::Index(source_index) = line.kind else {
                i += 1;
                continue;
            };
            ordinal += 1;

            let Some(next) = self.lines.get(i + 1) else {
                break;
            };
            let LineKind::TimeRange { start, end } = &next.kind else {
                i += 1;
                continue;
            };

            let mut text = Vec::new();
            let mut j = i + 2;
            while let Some(l) = self.lines.get(j) {
                if !matches!(l.kind, LineKind::Text) {
                    break;
                }
                text.push(l.content.clone());
                j += 1;
            }

            captions.push(Caption {
                number: ordinal,
                source_index,
                line: i + 2,
                start: start.clone(),
                end: end.clone(),
                text,
            });
            i = j;
        }

        captions
    }
}

/// One subtitle entry materialized from the line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// 1-based position among caption number lines.
    pub number: u64,
    /// Number as written in the source file.
    pub source_index: u64,
    /// 1-based line number of the time range line.
    pub line: usize,
    /// Raw start text.
    pub start: String,
    /// Raw end text.
    pub end: String,
    /// Text lines.
    pub text: Vec<String>,
}

impl Caption {
    /// Parse the start and end timecodes.
    pub fn times(&self, fps: f64) -> Result<(Timestamp, Timestamp), TimecodeError> {
        Ok((parse_timecode(&self.start, fps)?, parse_timecode(&self.end, fps)?))
    }
}
