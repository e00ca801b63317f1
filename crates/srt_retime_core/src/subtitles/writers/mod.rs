//! Subtitle writers.
//!
//! Each writer is a pure function that takes a document and returns a formatted string.

mod srt;

pub use srt::write_srt;
