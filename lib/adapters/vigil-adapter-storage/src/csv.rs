use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::info;

use vigil_ports::DatasetPort;

/// A CSV file with a header row. Column types are inferred from every row.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetPort for CsvDataset {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<DataFrame> {
        info!(path = %self.path.display(), "reading dataset");
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .and_then(|reader| reader.finish())
            .with_context(|| format!("failed to read csv {}", self.path.display()))?;
        info!(rows = frame.height(), columns = frame.width(), "dataset ready");
        Ok(frame)
    }
}
