use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub tables: TablesConfig,
    pub ingest: IngestConfig,
    pub models: ModelsConfig,
}

impl VigilConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    pub raw: String,
    pub source: String,
    pub predictions: String,
    pub order_by: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            raw: "machine_data_raw".into(),
            source: "ANALYTICAL_MAINTENANCE".into(),
            predictions: "predictions".into(),
            order_by: crate::schema::TIMESTAMP_CLEAN.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub csv_path: PathBuf,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/cleaned_pred_main.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub classifier_path: PathBuf,
    pub regressor_path: PathBuf,
    pub vocabulary_path: PathBuf,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            classifier_path: PathBuf::from("models/xgb_classifier.json"),
            regressor_path: PathBuf::from("models/rf_regressor.json"),
            vocabulary_path: PathBuf::from("models/label_encoder.json"),
        }
    }
}
