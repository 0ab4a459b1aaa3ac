use anyhow::{Context, Result, bail, ensure};
use ndarray::Axis;

use vigil_ports::{PointModel, ProbabilityModel};

use crate::projector::FeatureViews;

/// Column of the classifier output that holds the failure probability.
pub const POSITIVE_CLASS: usize = 1;

/// Model outputs, positionally aligned with the scored batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    pub failure_probability: Vec<f64>,
    pub predicted_temperature: Vec<f64>,
}

impl Predictions {
    pub fn len(&self) -> usize {
        self.failure_probability.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failure_probability.is_empty()
    }
}

/// Runs the failure classifier and the temperature regressor over their views.
pub struct DualInferenceEngine<C, R> {
    classifier: C,
    regressor: R,
}

impl<C, R> DualInferenceEngine<C, R>
where
    C: ProbabilityModel,
    R: PointModel,
{
    pub fn new(classifier: C, regressor: R) -> Self {
        Self {
            classifier,
            regressor,
        }
    }

    pub fn infer(&self, views: &FeatureViews) -> Result<Predictions> {
        let rows = views.n_rows();
        ensure!(
            views.temperature.n_rows() == rows,
            "feature views disagree on row count ({} vs {})",
            rows,
            views.temperature.n_rows()
        );

        tracing::info!(rows, "running failure prediction");
        let failure_probability = self.failure_probability(views)?;

        tracing::info!(rows, "running virtual temperature sensor");
        let predicted_temperature = self
            .regressor
            .predict(&views.temperature)
            .context("temperature regressor failed")?
            .to_vec();
        ensure!(
            predicted_temperature.len() == rows,
            "temperature regressor returned {} predictions for {} rows",
            predicted_temperature.len(),
            rows
        );

        Ok(Predictions {
            failure_probability,
            predicted_temperature,
        })
    }

    fn failure_probability(&self, views: &FeatureViews) -> Result<Vec<f64>> {
        let rows = views.n_rows();
        let probabilities = self
            .classifier
            .predict_proba(&views.failure)
            .context("failure classifier failed")?;
        ensure!(
            probabilities.nrows() == rows,
            "failure classifier returned {} rows for {} inputs",
            probabilities.nrows(),
            rows
        );
        ensure!(
            probabilities.ncols() > POSITIVE_CLASS,
            "failure classifier returned {} class columns, expected at least 2",
            probabilities.ncols()
        );

        let positive = probabilities.index_axis(Axis(1), POSITIVE_CLASS).to_vec();
        if let Some((row, value)) = positive
            .iter()
            .enumerate()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            bail!("failure probability {value} at row {row} is outside [0, 1]");
        }
        Ok(positive)
    }
}
