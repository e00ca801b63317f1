//! Timecode parsing and formatting.
//!
//! Two notations are accepted on input:
//!
//! - **Clock**: `HH:MM:SS,mmm` (SRT native, millisecond precision)
//! - **Frame**: `HH:MM:SS:FF` (editor timecode, frame precision at a fixed rate)
//!
//! Output is always clock form.
//!
//! Fields are validated by digit count only. `99` is accepted as an hour and
//! a frame number above the frame rate is converted arithmetically; nothing
//! downstream needs the components to be in range.

use crate::subtitles::error::TimecodeError;
use crate::subtitles::types::Timestamp;

/// Frame rate used for `HH:MM:SS:FF` when none is configured.
pub const DEFAULT_FRAME_RATE: f64 = 24.0;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Notation a timecode string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimecodeNotation {
    /// `HH:MM:SS,mmm`
    Clock,
    /// `HH:MM:SS:FF`
    Frame,
}

impl TimecodeNotation {
    /// Short name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Frame => "frame",
        }
    }
}

/// Detect which notation a string is written in.
///
/// Returns `None` if it matches neither.
pub fn detect_notation(s: &str) -> Option<TimecodeNotation> {
    let fields: Vec<&str> = s.split(':').collect();

    match fields.as_slice() {
        [hh, mm, rest] if is_digits(hh, 2) && is_digits(mm, 2) => {
            let (ss, ms) = rest.split_once(',')?;
            (is_digits(ss, 2) && is_digits(ms, 3)).then_some(TimecodeNotation::Clock)
        }
        [hh, mm, ss, ff]
            if is_digits(hh, 2) && is_digits(mm, 2) && is_digits(ss, 2) && is_digits(ff, 2) =>
        {
            Some(TimecodeNotation::Frame)
        }
        _ => None,
    }
}

/// Parse a clock-form or frame-form timecode into a timestamp.
///
/// Frame numbers convert as `round(FF * 1000 / fps)`.
///
/// # Examples
/// ```
/// use srt_retime_core::subtitles::parse_timecode;
///
/// let clock = parse_timecode("00:00:41,708", 24.0).unwrap();
/// let frame = parse_timecode("00:00:41:17", 24.0).unwrap();
/// assert_eq!(clock, frame);
/// ```
pub fn parse_timecode(s: &str, fps: f64) -> Result<Timestamp, TimecodeError> {
    validate_frame_rate(fps)?;

    let notation = detect_notation(s).ok_or_else(|| TimecodeError::malformed(s))?;
    let fields: Vec<&str> = s.split([':', ',']).collect();

    let hours = parse_field(fields[0]);
    let minutes = parse_field(fields[1]);
    let seconds = parse_field(fields[2]);
    let sub_second = match notation {
        TimecodeNotation::Clock => Some(parse_field(fields[3])),
        TimecodeNotation::Frame => frames_to_millis(parse_field(fields[3]), fps),
    };

    // Two-digit fields cannot overflow; a frame term at a tiny fps can.
    sub_second
        .and_then(|ms| {
            ms.checked_add(hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND)
        })
        .map(Timestamp::from_millis)
        .ok_or_else(|| TimecodeError::OutOfRange {
            value: s.to_string(),
            fps,
        })
}

/// Format a timestamp as `HH:MM:SS,mmm`.
///
/// Hours are padded to two digits but never truncated, so 100 hours and up
/// are written with three or more digits.
pub fn format_timecode(ts: Timestamp) -> String {
    let ms = ts.as_millis();

    let hours = ms / MS_PER_HOUR;
    let rem = ms % MS_PER_HOUR;
    let minutes = rem / MS_PER_MINUTE;
    let rem = rem % MS_PER_MINUTE;
    let seconds = rem / MS_PER_SECOND;
    let millis = rem % MS_PER_SECOND;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Reject frame rates that cannot be divided by.
pub fn validate_frame_rate(fps: f64) -> Result<(), TimecodeError> {
    if fps.is_finite() && fps > 0.0 {
        Ok(())
    } else {
        Err(TimecodeError::InvalidFrameRate(fps))
    }
}

/// `None` when the result does not fit in a `u64`.
fn frames_to_millis(frames: u64, fps: f64) -> Option<u64> {
    let ms = (frames as f64 * 1000.0 / fps).round();
    // 2^64 is exactly representable; anything at or above it would saturate.
    (ms.is_finite() && ms < u64::MAX as f64).then_some(ms as u64)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

// Only called on fields already checked by `is_digits`.
fn parse_field(s: &str) -> u64 {
    s.bytes().fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}
