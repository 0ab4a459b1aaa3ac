use std::path::PathBuf;

use thiserror::Error;
use vigil_domain::EncodingVocabulary;

use crate::models::{PointModel, ProbabilityModel};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model artifact not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("model artifact {} is unreadable: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },
}

impl ArtifactError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Missing { path } | Self::Unreadable { path, .. } => path,
        }
    }
}

/// Loads the pre-trained artifacts a scoring run consumes.
pub trait ArtifactStorePort {
    fn load_classifier(&self) -> Result<Box<dyn ProbabilityModel>, ArtifactError>;
    fn load_regressor(&self) -> Result<Box<dyn PointModel>, ArtifactError>;
    fn load_vocabulary(&self) -> Result<EncodingVocabulary, ArtifactError>;
}
