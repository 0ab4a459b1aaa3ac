use std::fmt;

use serde::{Deserialize, Serialize};

/// Probabilities strictly above this value are labelled high risk.
pub const RISK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    HighRisk,
    Normal,
}

impl RiskLabel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > RISK_THRESHOLD {
            Self::HighRisk
        } else {
            Self::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::Normal => "Normal",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model-derived fields of one scored row. Fields are derived once in
/// [`ScoredRecord::new`]; the row's identifiers travel with the source batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub failure_probability: f64,
    pub risk_label: RiskLabel,
    pub predicted_process_temp: f64,
    pub actual_process_temp: f64,
    pub temp_anomaly_score: f64,
}

impl ScoredRecord {
    pub fn new(
        failure_probability: f64,
        predicted_process_temp: f64,
        actual_process_temp: f64,
    ) -> Self {
        Self {
            failure_probability,
            risk_label: RiskLabel::from_probability(failure_probability),
            predicted_process_temp,
            actual_process_temp,
            temp_anomaly_score: (actual_process_temp - predicted_process_temp).abs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoringSummary {
    pub rows: usize,
    pub high_risk: usize,
    pub mean_anomaly_score: Option<f64>,
    pub max_anomaly_score: Option<f64>,
}

impl ScoringSummary {
    /// NaN anomaly scores (missing actual temperatures) are left out of the statistics.
    pub fn from_records(records: &[ScoredRecord]) -> Self {
        let high_risk = records
            .iter()
            .filter(|record| record.risk_label == RiskLabel::HighRisk)
            .count();
        let scores: Vec<f64> = records
            .iter()
            .map(|record| record.temp_anomaly_score)
            .filter(|score| !score.is_nan())
            .collect();
        let mean_anomaly_score =
            (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);
        let max_anomaly_score = scores.iter().copied().reduce(f64::max);

        Self {
            rows: records.len(),
            high_risk,
            mean_anomaly_score,
            max_anomaly_score,
        }
    }
}
