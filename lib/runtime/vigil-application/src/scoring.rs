use anyhow::{Context, Result};
use tracing::info;

use vigil_domain::{EncodingVocabulary, ScoringSummary, TablesConfig};
use vigil_ml::{DualInferenceEngine, FeatureProjector, ScoredBatch, TelemetryFrame, compose};
use vigil_ports::{
    ArtifactStorePort, PointModel, ProbabilityModel, TableSinkPort, TelemetrySourcePort,
};

use crate::error::{RunError, RunResult};

/// Encode, project, infer and compose one in-memory batch.
pub fn score_batch<C, R>(
    telemetry: &TelemetryFrame,
    vocabulary: &EncodingVocabulary,
    engine: &DualInferenceEngine<C, R>,
) -> Result<ScoredBatch>
where
    C: ProbabilityModel,
    R: PointModel,
{
    let views = FeatureProjector::new(vocabulary).project(telemetry)?;
    let predictions = engine.infer(&views)?;
    compose(
        telemetry.identifiers()?,
        &predictions,
        &telemetry.process_temperature()?,
    )
}

/// Reads the source table, scores every row and replaces the predictions table.
#[derive(Debug, Clone)]
pub struct ScoringJob {
    tables: TablesConfig,
}

impl ScoringJob {
    pub fn new(tables: TablesConfig) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &TablesConfig {
        &self.tables
    }

    pub fn run<S>(&self, artifacts: &dyn ArtifactStorePort, storage: &mut S) -> RunResult<ScoringSummary>
    where
        S: TelemetrySourcePort + TableSinkPort,
    {
        info!("loading models");
        let classifier = artifacts.load_classifier().map_err(RunError::Artifact)?;
        let regressor = artifacts.load_regressor().map_err(RunError::Artifact)?;
        let vocabulary = artifacts.load_vocabulary().map_err(RunError::Artifact)?;
        let engine = DualInferenceEngine::new(classifier, regressor);

        info!(table = %self.tables.source, "fetching data");
        let telemetry = storage
            .fetch_ordered(&self.tables.source, &self.tables.order_by)
            .and_then(TelemetryFrame::new)
            .map_err(RunError::Source)?;

        let batch = score_batch(&telemetry, &vocabulary, &engine).map_err(RunError::Scoring)?;
        let frame = batch
            .to_frame()
            .context("failed to lay out predictions")
            .map_err(RunError::Scoring)?;

        let table = &self.tables.predictions;
        info!(rows = batch.len(), %table, "uploading predictions");
        storage
            .replace_table(table, &frame)
            .map_err(|cause| RunError::Write {
                table: table.clone(),
                cause,
            })?;

        let summary = batch.summary();
        info!(
            rows = summary.rows,
            high_risk = summary.high_risk,
            mean_anomaly_score = ?summary.mean_anomaly_score,
            "predictions uploaded"
        );
        Ok(summary)
    }
}
