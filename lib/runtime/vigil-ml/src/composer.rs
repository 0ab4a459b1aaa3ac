use anyhow::{Result, ensure};
use polars::prelude::*;

use vigil_domain::schema::{
    ACTUAL_PROCESS_TEMP, FAILURE_PROBABILITY, IDENTIFIER_COLUMNS, PREDICTED_PROCESS_TEMP,
    RISK_LABEL, TEMP_ANOMALY_SCORE,
};
use vigil_domain::{ScoredRecord, ScoringSummary};

use crate::inference::Predictions;

/// Source identifier columns paired with one scored record per row.
#[derive(Debug, Clone)]
pub struct ScoredBatch {
    identifiers: DataFrame,
    records: Vec<ScoredRecord>,
}

impl ScoredBatch {
    pub fn identifiers(&self) -> &DataFrame {
        &self.identifiers
    }

    pub fn records(&self) -> &[ScoredRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> ScoringSummary {
        ScoringSummary::from_records(&self.records)
    }

    /// Lays the batch out in the prediction table's column order: identifiers
    /// as read, then the derived columns.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let records = &self.records;
        let probability: Vec<f64> = records.iter().map(|r| r.failure_probability).collect();
        let risk: Vec<&str> = records.iter().map(|r| r.risk_label.as_str()).collect();
        let predicted: Vec<f64> = records.iter().map(|r| r.predicted_process_temp).collect();
        let actual: Vec<f64> = records.iter().map(|r| r.actual_process_temp).collect();
        let anomaly: Vec<f64> = records.iter().map(|r| r.temp_anomaly_score).collect();

        self.identifiers.hstack(&[
            Series::new(FAILURE_PROBABILITY, probability),
            Series::new(RISK_LABEL, risk),
            Series::new(PREDICTED_PROCESS_TEMP, predicted),
            Series::new(ACTUAL_PROCESS_TEMP, actual),
            Series::new(TEMP_ANOMALY_SCORE, anomaly),
        ])
    }
}

/// Joins identifier rows, predictions and measured temperatures by position.
pub fn compose(
    identifiers: DataFrame,
    predictions: &Predictions,
    actual_temperature: &[f64],
) -> Result<ScoredBatch> {
    ensure!(
        identifiers.get_column_names() == IDENTIFIER_COLUMNS,
        "identifier columns must be {}",
        IDENTIFIER_COLUMNS.join(", ")
    );
    let rows = identifiers.height();
    ensure!(
        predictions.failure_probability.len() == rows
            && predictions.predicted_temperature.len() == rows
            && actual_temperature.len() == rows,
        "cannot align {} identities with {} probabilities, {} predicted and {} actual temperatures",
        rows,
        predictions.failure_probability.len(),
        predictions.predicted_temperature.len(),
        actual_temperature.len()
    );

    let records = (0..rows)
        .map(|row| {
            ScoredRecord::new(
                predictions.failure_probability[row],
                predictions.predicted_temperature[row],
                actual_temperature[row],
            )
        })
        .collect();
    Ok(ScoredBatch {
        identifiers,
        records,
    })
}
