use anyhow::Result;
use polars::prelude::DataFrame;

/// Reads a whole telemetry table into memory.
pub trait TelemetrySourcePort {
    /// Returns every row of `table`, ascending by `order_by`.
    fn fetch_ordered(&mut self, table: &str, order_by: &str) -> Result<DataFrame>;
}

/// Persists a frame, replacing whatever the table held before.
pub trait TableSinkPort {
    /// Returns the number of rows written. On error the previous contents survive.
    fn replace_table(&mut self, table: &str, frame: &DataFrame) -> Result<usize>;
}

/// A flat file dataset loaded in one piece.
pub trait DatasetPort {
    /// Human readable location for messages.
    fn location(&self) -> String;
    fn exists(&self) -> bool;
    fn read(&self) -> Result<DataFrame>;
}
