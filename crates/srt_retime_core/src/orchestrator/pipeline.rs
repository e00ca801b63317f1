//! Retiming pipeline: read, compute offset, retime, write.

use std::path::PathBuf;

use serde::Serialize;

use crate::subtitles::{
    calculate_offset, parse_file, retime_document, write_file, OffsetCalculation, RetimeOutcome,
    SrtDocument, SyncConfig,
};

use super::errors::{PipelineError, PipelineResult};

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RetimeJob {
    /// Subtitle file to read.
    pub input: PathBuf,
    /// Subtitle file to write.
    pub output: PathBuf,
    /// New start time of the reference caption (clock or frame timecode).
    pub new_time: String,
    /// Reference caption and frame rate.
    pub sync: SyncConfig,
}

impl RetimeJob {
    /// Create a job with the default reference (caption 1) and frame rate.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        new_time: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            new_time: new_time.into(),
            sync: SyncConfig::default(),
        }
    }

    /// Set the reference caption.
    pub fn with_reference(mut self, reference: u64) -> Self {
        self.sync.reference = reference;
        self
    }

    /// Set the frame rate for frame timecodes.
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.sync.frame_rate = frame_rate;
        self
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RetimeReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// How the offset was derived.
    pub offset: OffsetCalculation,
    /// Caption numbers written.
    pub captions_renumbered: u64,
    /// Timing lines shifted.
    pub captions_shifted: usize,
}

/// Retime an already parsed document without touching the filesystem.
pub fn retime(
    doc: &SrtDocument,
    new_time: &str,
    sync: &SyncConfig,
) -> PipelineResult<(OffsetCalculation, RetimeOutcome)> {
    let calc = calculate_offset(doc, sync, new_time).map_err(PipelineError::Offset)?;
    let outcome = retime_document(doc, sync, calc.offset_ms).map_err(PipelineError::Retime)?;
    Ok((calc, outcome))
}

/// Run a job end to end.
///
/// The output file is only touched after the whole document has been
/// retimed in memory, so any failure before the write leaves it as it was.
pub fn run_job(job: &RetimeJob) -> PipelineResult<RetimeReport> {
    tracing::info!("New time: {}", job.new_time);
    tracing::info!("Reference caption: {}", job.sync.reference);

    let doc = parse_file(&job.input).map_err(PipelineError::InputAccess)?;
    tracing::info!(
        "Read {} ({} lines, {} captions)",
        job.input.display(),
        doc.lines.len(),
        doc.index_count()
    );

    let (offset, outcome) = retime(&doc, &job.new_time, &job.sync)?;

    write_file(&outcome.document, &job.output).map_err(PipelineError::OutputAccess)?;
    tracing::info!("{} was updated", job.output.display());

    Ok(RetimeReport {
        input: job.input.clone(),
        output: job.output.clone(),
        offset,
        captions_renumbered: outcome.captions_renumbered,
        captions_shifted: outcome.captions_shifted,
    })
}
