//! Logging for srt-retime.
//!
//! The library only emits `tracing` events. Binaries call [`init_tracing`]
//! once at startup to print them.

mod types;

pub use types::LogLevel;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Events go to
/// stderr without timestamps or targets so stdout stays free for the run
/// report.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(env_filter(default_level))
        .init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level.to_tracing_level()).into())
        .from_env_lossy()
}
