//! CLI integration tests for srt-retime
//!
//! Runs the compiled binary inside a temporary working directory and checks
//! the files it leaves behind.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE: &str = "1\r\n00:01:19,111 --> 00:01:20,646\r\nThat's the cleanup crew\r\n\r\n\
2\r\n00:01:20,679 --> 00:01:22,647\r\nup on the track,\r\nand that's a lot of racers\r\n\r\n\
3\r\n00:01:22,681 --> 00:01:25,450\r\ninvolved there, folks.\r\n";

// ============================================================================
// Helper Functions
// ============================================================================

/// Working directory with `input.srt` in it.
fn workdir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("input.srt"), SAMPLE).expect("Failed to write input");
    dir
}

/// Run srt-retime in `dir` and return output
fn run_retime(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_srt-retime"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn read_output(dir: &Path) -> String {
    fs::read_to_string(dir.join("output.srt")).expect("output.srt missing")
}

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn test_shift_from_first_caption() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:49,111"]);

    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(stdout_string(&output).contains("output.srt was updated!"));

    let written = read_output(dir.path());
    assert!(written.starts_with("1\r\n00:00:49,111 --> 00:00:50,646\r\n"));
    assert!(written.contains("2\r\n00:00:50,679 --> 00:00:52,647\r\n"));
    assert!(written.contains("3\r\n00:00:52,681 --> 00:00:55,450\r\n"));
}

#[test]
fn test_shift_from_second_caption() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:49,111", "2"]);

    assert!(output.status.success(), "stderr: {}", stderr_string(&output));

    let written = read_output(dir.path());
    assert!(written.contains("1\r\n00:01:19,111 --> 00:01:20,646\r\n"));
    assert!(written.contains("2\r\n00:00:49,111 --> 00:00:51,079\r\n"));
    assert!(written.contains("3\r\n00:00:51,113 --> 00:00:53,882\r\n"));
}

#[test]
fn test_frame_timecode() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:41:17"]);

    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(read_output(dir.path()).starts_with("1\r\n00:00:41,708 --> "));
}

#[test]
fn test_custom_paths_and_json_report() {
    let dir = workdir();
    fs::rename(dir.path().join("input.srt"), dir.path().join("movie.srt")).unwrap();

    let output = run_retime(
        dir.path(),
        &["00:00:49,111", "-i", "movie.srt", "-o", "fixed.srt", "--json", "-q"],
    );

    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(dir.path().join("fixed.srt").exists());

    let report: serde_json::Value = serde_json::from_str(&stdout_string(&output)).unwrap();
    assert_eq!(report["offset"]["offset_ms"], -30_000);
    assert_eq!(report["offset"]["old_start"], 79_111);
    assert_eq!(report["captions_shifted"], 3);
}

#[test]
fn test_settings_file() {
    let dir = workdir();
    fs::write(
        dir.path().join("srt-retime.toml"),
        "[paths]\noutput = \"from_config.srt\"\n\n[timing]\nreference_line = 2\n",
    )
    .unwrap();

    let output = run_retime(dir.path(), &["00:00:49,111"]);

    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    let written = fs::read_to_string(dir.path().join("from_config.srt")).unwrap();
    assert!(written.contains("1\r\n00:01:19,111 --> 00:01:20,646\r\n"));
}

#[test]
fn test_write_config() {
    let dir = workdir();
    let output = run_retime(
        dir.path(),
        &["00:00:49,111", "--fps", "25", "--config", "saved.toml", "--write-config"],
    );

    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    let saved = fs::read_to_string(dir.path().join("saved.toml")).unwrap();
    assert!(saved.contains("frame_rate = 25.0"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_zero_offset_writes_nothing() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:01:19,111"]);

    assert!(!output.status.success());
    assert!(stderr_string(&output).contains("No difference from current time"));
    assert!(!dir.path().join("output.srt").exists());
}

#[test]
fn test_malformed_time_writes_nothing() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["abc"]);

    assert!(!output.status.success());
    assert!(stderr_string(&output).contains("Malformed timecode 'abc'"));
    assert!(!dir.path().join("output.srt").exists());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_retime(dir.path(), &["00:00:49,111"]);

    assert!(!output.status.success());
    assert!(stderr_string(&output).contains("input.srt"));
    assert!(!dir.path().join("output.srt").exists());
}

#[test]
fn test_missing_explicit_config() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:49,111", "--config", "nope.toml"]);

    assert!(!output.status.success());
    assert!(stderr_string(&output).contains("Config file not found"));
}

#[test]
fn test_invalid_fps() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:49,111", "--fps", "0"]);

    assert!(!output.status.success());
    assert!(stderr_string(&output).contains("frame_rate"));
    assert!(!dir.path().join("output.srt").exists());
}

#[test]
fn test_tiny_fps_fails_cleanly() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:01:01", "--fps", "1e-300"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_string(&output).contains("out of range"));
    assert!(!dir.path().join("output.srt").exists());
}

#[test]
fn test_missing_new_time_is_usage_error() {
    let dir = workdir();
    let output = run_retime(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_reference_zero_is_usage_error() {
    let dir = workdir();
    let output = run_retime(dir.path(), &["00:00:49,111", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("output.srt").exists());
}
