use anyhow::{Result, bail};
use ndarray::{Array1, Array2};
use polars::prelude::*;

use vigil_domain::FeatureView;
use vigil_ports::{PointModel, ProbabilityModel};

use crate::frame::TelemetryFrame;

/// A batch shaped like the maintenance source table.
pub fn telemetry_frame(machine_types: &[&str], process_temperatures: &[f64]) -> TelemetryFrame {
    let rows = machine_types.len();
    let udi: Vec<i64> = (1..=rows as i64).collect();
    let product_id: Vec<String> = udi.iter().map(|udi| format!("P{udi}")).collect();
    let timestamp: Vec<String> = (0..rows)
        .map(|minute| format!("2024-01-01 00:{minute:02}:00"))
        .collect();
    let air: Vec<f64> = (0..rows).map(|row| 298.0 + row as f64).collect();
    let speed: Vec<i64> = (0..rows).map(|row| 1500 + row as i64 * 10).collect();
    let failure: Vec<bool> = vec![false; rows];
    let status: Vec<i64> = vec![1; rows];

    let frame = df!(
        "udi" => udi,
        "product_id" => product_id,
        "timestamp_clean" => timestamp,
        "machine_type" => machine_types,
        "air_temperature" => air,
        "process_temperature" => process_temperatures,
        "rotational_speed" => speed,
        "machine_failure" => failure,
        "operational_status" => status
    )
    .expect("telemetry frame");
    TelemetryFrame::new(frame).expect("telemetry columns")
}

/// Returns canned positive-class probabilities.
pub struct FixedClassifier(pub Vec<f64>);

impl ProbabilityModel for FixedClassifier {
    fn predict_proba(&self, view: &FeatureView) -> Result<Array2<f64>> {
        if view.n_rows() != self.0.len() {
            bail!("expected {} rows, got {}", self.0.len(), view.n_rows());
        }
        Ok(Array2::from_shape_fn((self.0.len(), 2), |(row, class)| {
            if class == 1 {
                self.0[row]
            } else {
                1.0 - self.0[row]
            }
        }))
    }
}

/// Returns canned point predictions.
pub struct FixedRegressor(pub Vec<f64>);

impl PointModel for FixedRegressor {
    fn predict(&self, view: &FeatureView) -> Result<Array1<f64>> {
        if view.n_rows() != self.0.len() {
            bail!("expected {} rows, got {}", self.0.len(), view.n_rows());
        }
        Ok(Array1::from(self.0.clone()))
    }
}
