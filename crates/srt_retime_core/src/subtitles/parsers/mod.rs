//! Subtitle parsers.
//!
//! Each parser is a pure function that takes content and returns a document.

mod srt;

pub use srt::{parse_index, parse_srt, split_time_range, time_range_suffix, TIME_SEPARATOR};
