//! srt-retime - Main entry point
//!
//! Shifts every caption from a reference caption on so that the reference
//! starts at a new time. Handles:
//! - Argument parsing
//! - Configuration loading and command-line overrides
//! - Logging initialization
//! - Reporting the outcome

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use srt_retime_core::config::{ConfigManager, Settings};
use srt_retime_core::logging::{init_tracing, LogLevel};
use srt_retime_core::orchestrator::{run_job, RetimeJob, RetimeReport};

/// Settings file looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "srt-retime.toml";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "srt-retime")]
#[command(version)]
#[command(about = "Shift SRT subtitle timing so one caption starts at a new time")]
#[command(long_about = "Shift SRT subtitle timing so one caption starts at a new time.\n\n\
    The offset between the reference caption's current start and NEW_TIME is\n\
    applied to that caption and every caption after it. Earlier captions keep\n\
    their timing. All captions are renumbered from 1.\n\n\
    NEW_TIME is either HH:MM:SS,mmm or HH:MM:SS:FF (frames, 24 fps unless --fps).\n\n\
    EXAMPLES:\n    \
    srt-retime 00:00:49,111\n    \
    srt-retime 00:00:49,111 2\n    \
    srt-retime 00:00:41:17 -i movie.srt -o movie.fixed.srt")]
struct Cli {
    /// New start time of the reference caption (HH:MM:SS,mmm or HH:MM:SS:FF)
    new_time: String,

    /// Caption number to anchor the offset on [default: 1]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    reference: Option<u64>,

    /// Input subtitle file [default: input.srt]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output subtitle file [default: output.srt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Frame rate for HH:MM:SS:FF timecodes [default: 24]
    #[arg(long)]
    fps: Option<f64>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the effective settings to the settings file
    #[arg(long)]
    write_config: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Apply command-line overrides on top of file settings.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(input) = &self.input {
            settings.paths.input = input.display().to_string();
        }
        if let Some(output) = &self.output {
            settings.paths.output = output.display().to_string();
        }
        if let Some(fps) = self.fps {
            settings.timing.frame_rate = fps;
        }
        if let Some(reference) = self.reference {
            settings.timing.reference_line = reference;
        }
    }

    fn log_level(&self, configured: LogLevel) -> LogLevel {
        if self.quiet {
            LogLevel::Warn
        } else if self.verbose {
            configured.more_verbose()
        } else {
            configured
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => print_report(&report, cli.json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<RetimeReport> {
    let explicit_config = cli.config.is_some();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let mut config = ConfigManager::new(&config_path);
    if explicit_config && !cli.write_config {
        config.load()?;
    } else {
        config.load_or_default()?;
    }

    init_tracing(cli.log_level(config.settings().logging.level));
    tracing::debug!("srt-retime core {}", srt_retime_core::version());

    cli.apply_to(config.settings_mut());
    if let Err(message) = config.settings().validate() {
        bail!("Invalid settings: {}", message);
    }

    if cli.write_config {
        config.save()?;
        tracing::info!("Settings saved to {}", config.path().display());
    }

    let settings = config.settings();
    let job = RetimeJob {
        input: PathBuf::from(&settings.paths.input),
        output: PathBuf::from(&settings.paths.output),
        new_time: cli.new_time.clone(),
        sync: settings.sync_config(),
    };

    Ok(run_job(&job)?)
}

fn print_report(report: &RetimeReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!(
            "{} was updated! ({} captions shifted by {:+}ms)",
            report.output.display(),
            report.captions_shifted,
            report.offset.offset_ms
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments() {
        let cli = Cli::try_parse_from(["srt-retime", "00:00:49,111", "2"]).unwrap();
        assert_eq!(cli.new_time, "00:00:49,111");
        assert_eq!(cli.reference, Some(2));
    }

    #[test]
    fn reference_must_be_positive() {
        assert!(Cli::try_parse_from(["srt-retime", "00:00:49,111", "0"]).is_err());
        assert!(Cli::try_parse_from(["srt-retime", "00:00:49,111", "x"]).is_err());
    }

    #[test]
    fn overrides_replace_settings() {
        let cli = Cli::try_parse_from([
            "srt-retime",
            "00:00:41:17",
            "3",
            "-i",
            "a.srt",
            "-o",
            "b.srt",
            "--fps",
            "25",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply_to(&mut settings);

        assert_eq!(settings.paths.input, "a.srt");
        assert_eq!(settings.paths.output, "b.srt");
        assert_eq!(settings.timing.reference_line, 3);
        assert!((settings.timing.frame_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_overrides_keep_settings() {
        let cli = Cli::try_parse_from(["srt-retime", "00:00:49,111"]).unwrap();

        let mut settings = Settings::default();
        settings.timing.reference_line = 5;
        cli.apply_to(&mut settings);

        assert_eq!(settings.timing.reference_line, 5);
        assert_eq!(settings.paths.input, "input.srt");
    }

    #[test]
    fn log_level_flags() {
        let verbose = Cli::try_parse_from(["srt-retime", "00:00:49,111", "-v"]).unwrap();
        assert_eq!(verbose.log_level(LogLevel::Info), LogLevel::Debug);

        let quiet = Cli::try_parse_from(["srt-retime", "00:00:49,111", "-q"]).unwrap();
        assert_eq!(quiet.log_level(LogLevel::Debug), LogLevel::Warn);

        assert!(Cli::try_parse_from(["srt-retime", "00:00:49,111", "-v", "-q"]).is_err());
    }
}
