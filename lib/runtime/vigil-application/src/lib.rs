//! The two linear jobs: loading raw telemetry and scoring it.

pub mod error;
pub mod ingest;
pub mod scoring;

pub use error::{RunError, RunResult};
pub use ingest::IngestJob;
pub use scoring::{ScoringJob, score_batch};
