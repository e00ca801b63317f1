//! srt-retime core - SRT retiming logic.
//!
//! This crate contains all retiming logic with zero CLI dependencies:
//! timecode parsing, SRT line classification, offset calculation,
//! renumbering and shifting, plus settings and logging setup.

pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod subtitles;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
