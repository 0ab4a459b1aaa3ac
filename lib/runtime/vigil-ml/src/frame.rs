use anyhow::{Result, bail};
use polars::prelude::*;

use vigil_domain::schema::{
    IDENTIFIER_COLUMNS, MACHINE_TYPE, PROCESS_TEMPERATURE, REQUIRED_INPUT_COLUMNS,
};

/// A telemetry batch that carries every column the scoring job relies on.
#[derive(Debug, Clone)]
pub struct TelemetryFrame {
    frame: DataFrame,
}

impl TelemetryFrame {
    pub fn new(frame: DataFrame) -> Result<Self> {
        let present = frame.get_column_names();
        let missing: Vec<&str> = REQUIRED_INPUT_COLUMNS
            .iter()
            .copied()
            .filter(|name| !present.contains(name))
            .collect();
        if !missing.is_empty() {
            bail!("telemetry is missing columns: {}", missing.join(", "));
        }
        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Identifier columns exactly as read: dtypes and nulls are left alone.
    pub fn identifiers(&self) -> Result<DataFrame> {
        Ok(self.frame.select(IDENTIFIER_COLUMNS)?)
    }

    /// Measured process temperatures; nulls become NaN.
    pub fn process_temperature(&self) -> Result<Vec<f64>> {
        numeric_column(self.frame.column(PROCESS_TEMPERATURE)?)
    }

    /// Raw `machine_type` labels. Non-text categories are rendered as text.
    pub fn machine_types(&self) -> Result<Vec<Option<String>>> {
        let labels = self.frame.column(MACHINE_TYPE)?.cast(&DataType::String)?;
        Ok(labels
            .str()?
            .into_iter()
            .map(|label| label.map(str::to_string))
            .collect())
    }
}

/// Reads a numeric or boolean column as `f64`, mapping nulls to NaN.
pub(crate) fn numeric_column(series: &Series) -> Result<Vec<f64>> {
    let dtype = series.dtype();
    if !(dtype.is_numeric() || matches!(dtype, DataType::Boolean | DataType::Null)) {
        bail!("column '{}' is not numeric ({dtype})", series.name());
    }
    let values = series.cast(&DataType::Float64)?;
    Ok(values
        .f64()?
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}
