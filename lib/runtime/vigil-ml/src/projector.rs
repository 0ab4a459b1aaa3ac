use anyhow::{Context, Result};
use ndarray::Array2;

use vigil_domain::schema::{CLASSIFIER_EXCLUDED, MACHINE_TYPE, REGRESSOR_EXCLUDED};
use vigil_domain::{EncodingVocabulary, FeatureView};

use crate::encoder::CategoryEncoder;
use crate::frame::{TelemetryFrame, numeric_column};

/// The two model inputs derived from one batch. Both keep the batch's row order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureViews {
    /// Classifier input.
    pub failure: FeatureView,
    /// Regressor input; `failure` minus `process_temperature`.
    pub temperature: FeatureView,
}

impl FeatureViews {
    pub fn n_rows(&self) -> usize {
        self.failure.n_rows()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureProjector<'a> {
    encoder: CategoryEncoder<'a>,
}

impl<'a> FeatureProjector<'a> {
    pub fn new(vocabulary: &'a EncodingVocabulary) -> Self {
        Self {
            encoder: CategoryEncoder::new(vocabulary),
        }
    }

    pub fn project(&self, telemetry: &TelemetryFrame) -> Result<FeatureViews> {
        let failure = self
            .view(telemetry, &CLASSIFIER_EXCLUDED)
            .context("failed to build classifier features")?;
        let temperature = self
            .view(telemetry, &REGRESSOR_EXCLUDED)
            .context("failed to build regressor features")?;
        tracing::debug!(
            rows = failure.n_rows(),
            classifier_features = failure.n_features(),
            regressor_features = temperature.n_features(),
            "projected feature views"
        );
        Ok(FeatureViews {
            failure,
            temperature,
        })
    }

    /// Drops `excluded` and encodes `machine_type`; remaining columns keep their order.
    pub fn view(&self, telemetry: &TelemetryFrame, excluded: &[&str]) -> Result<FeatureView> {
        let rows = telemetry.height();
        let mut names = Vec::new();
        let mut columns = Vec::new();

        for series in telemetry.frame().get_columns() {
            let name = series.name();
            if excluded.contains(&name) {
                continue;
            }
            let values = if name == MACHINE_TYPE {
                self.encoder.encode_column(&telemetry.machine_types()?)
            } else {
                numeric_column(series)?
            };
            names.push(name.to_string());
            columns.push(values);
        }

        let values = Array2::from_shape_fn((rows, columns.len()), |(row, column)| {
            columns[column][row]
        });
        FeatureView::new(names, values)
    }
}
