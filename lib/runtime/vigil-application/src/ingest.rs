use tracing::info;

use vigil_ports::{DatasetPort, TableSinkPort};

use crate::error::{RunError, RunResult};

/// Copies a flat dataset into the raw telemetry table, replacing it.
#[derive(Debug, Clone)]
pub struct IngestJob {
    table: String,
}

impl IngestJob {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn run(&self, dataset: &dyn DatasetPort, sink: &mut dyn TableSinkPort) -> RunResult<usize> {
        if !dataset.exists() {
            return Err(RunError::MissingInput(dataset.location()));
        }

        info!(location = %dataset.location(), "reading data");
        let frame = dataset.read().map_err(RunError::Source)?;
        info!(rows = frame.height(), "data ready");

        info!(table = %self.table, "uploading");
        let written = sink
            .replace_table(&self.table, &frame)
            .map_err(|cause| RunError::Write {
                table: self.table.clone(),
                cause,
            })?;
        info!(table = %self.table, rows = written, "data loaded");
        Ok(written)
    }
}
