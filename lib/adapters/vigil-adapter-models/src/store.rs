use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use vigil_domain::{EncodingVocabulary, ModelsConfig};
use vigil_ml::{TreeClassifier, TreeEnsemble, TreeRegressor};
use vigil_ports::{ArtifactError, ArtifactStorePort, PointModel, ProbabilityModel};

/// Artifacts at the paths named by [`ModelsConfig`].
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    config: ModelsConfig,
}

impl FileArtifactStore {
    pub fn new(config: ModelsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelsConfig {
        &self.config
    }
}

impl ArtifactStorePort for FileArtifactStore {
    fn load_classifier(&self) -> Result<Box<dyn ProbabilityModel>, ArtifactError> {
        let path = &self.config.classifier_path;
        let classifier = load(path, |raw| TreeClassifier::new(TreeEnsemble::from_json(raw)?))?;
        info!(
            path = %path.display(),
            trees = classifier.ensemble().trees.len(),
            "loaded failure classifier"
        );
        Ok(Box::new(classifier))
    }

    fn load_regressor(&self) -> Result<Box<dyn PointModel>, ArtifactError> {
        let path = &self.config.regressor_path;
        let regressor = load(path, |raw| TreeRegressor::new(TreeEnsemble::from_json(raw)?))?;
        info!(
            path = %path.display(),
            trees = regressor.ensemble().trees.len(),
            "loaded temperature regressor"
        );
        Ok(Box::new(regressor))
    }

    fn load_vocabulary(&self) -> Result<EncodingVocabulary, ArtifactError> {
        let path = &self.config.vocabulary_path;
        let vocabulary = load(path, EncodingVocabulary::from_json)?;
        info!(
            path = %path.display(),
            classes = vocabulary.len(),
            "loaded encoding vocabulary"
        );
        Ok(vocabulary)
    }
}

fn load<T>(path: &Path, parse: impl FnOnce(&str) -> Result<T>) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ArtifactError::Missing {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Unreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    })?;
    parse(&raw).map_err(|err| ArtifactError::Unreadable {
        path: path.to_path_buf(),
        reason: format!("{err:#}"),
    })
}
