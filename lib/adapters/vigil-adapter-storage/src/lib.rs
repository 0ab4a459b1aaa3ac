//! Storage adapters: SQLite tables and CSV datasets.

pub mod csv;
pub mod sqlite;

pub use csv::CsvDataset;
pub use sqlite::{DatabaseUrl, SqliteStorage};
