//! Pipeline orchestrator for a retiming run.
//!
//! ```text
//! run_job
//!     ├── read    input file -> SrtDocument
//!     ├── offset  reference caption start -> signed delta
//!     ├── retime  renumber + shift -> SrtDocument
//!     └── write   SrtDocument -> output file
//! ```
//!
//! Stages run strictly in order. Nothing is written unless every earlier
//! stage succeeded.
//!
//! # Example
//!
//! ```no_run
//! use srt_retime_core::orchestrator::{run_job, RetimeJob};
//!
//! let job = RetimeJob::new("input.srt", "output.srt", "00:00:49,111").with_reference(2);
//! let report = run_job(&job)?;
//! println!("{} was updated!", report.output.display());
//! # Ok::<(), srt_retime_core::orchestrator::PipelineError>(())
//! ```

mod errors;
mod pipeline;

pub use errors::{PipelineError, PipelineResult};
pub use pipeline::{retime, run_job, RetimeJob, RetimeReport};
