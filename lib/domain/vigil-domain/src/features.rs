use anyhow::{Result, bail};
use ndarray::{Array2, ArrayView1, Axis};

/// Column-projected numeric view of a telemetry batch, one row per record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureView {
    columns: Vec<String>,
    values: Array2<f64>,
}

impl FeatureView {
    pub fn new(columns: Vec<String>, values: Array2<f64>) -> Result<Self> {
        if columns.len() != values.ncols() {
            bail!(
                "feature view has {} column names for {} value columns",
                columns.len(),
                values.ncols()
            );
        }
        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.values.ncols()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(name)
            .map(|index| self.values.index_axis(Axis(1), index))
    }

    /// Reorders the view to `names`, failing on the first name it does not carry.
    pub fn select(&self, names: &[String]) -> Result<Array2<f64>> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            match self.column_index(name) {
                Some(index) => indices.push(index),
                None => bail!("feature view has no column '{name}'"),
            }
        }
        Ok(self.values.select(Axis(1), &indices))
    }
}
