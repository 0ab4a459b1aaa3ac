//! Terminal failures of a job run.

use thiserror::Error;

use vigil_ports::ArtifactError;

/// Every variant ends the run; nothing is retried. A failed write is reported
/// but still ends the run normally.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0} not found")]
    MissingConfiguration(String),

    #[error("invalid configuration: {0:#}")]
    InvalidConfiguration(anyhow::Error),

    #[error("database connection failed: {0:#}")]
    Connection(anyhow::Error),

    #[error("input file not found at {0}")]
    MissingInput(String),

    #[error(transparent)]
    Artifact(ArtifactError),

    #[error("failed to read telemetry: {0:#}")]
    Source(anyhow::Error),

    #[error("scoring failed: {0:#}")]
    Scoring(anyhow::Error),

    #[error("upload to table '{table}' failed: {cause:#}")]
    Write { table: String, cause: anyhow::Error },
}

impl RunError {
    /// Process exit status reported for this failure. Zero for a failed write.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingConfiguration(_) | Self::InvalidConfiguration(_) => 2,
            Self::Connection(_) => 3,
            Self::MissingInput(_) | Self::Artifact(_) => 4,
            Self::Source(_) => 5,
            Self::Scoring(_) => 6,
            Self::Write { .. } => 0,
        }
    }
}

pub type RunResult<T> = Result<T, RunError>;
