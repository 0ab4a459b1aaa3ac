use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vigil_adapter_storage::CsvDataset;
use vigil_application::{IngestJob, RunResult};

use crate::{logging, report, settings};

/// Load the cleaned telemetry CSV into the raw table, replacing its contents.
#[derive(Debug, Parser)]
#[command(name = "load-data", version)]
pub struct LoadDataArgs {
    /// Database connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "VIGIL_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// CSV file to load (overrides ingest.csv_path)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Target table (overrides tables.raw)
    #[arg(long)]
    pub table: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Binary entry point.
pub fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = LoadDataArgs::parse();
    logging::init(args.verbose);
    match run(&args) {
        Ok(rows) => {
            println!("Loaded {rows} rows.");
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

pub fn run(args: &LoadDataArgs) -> RunResult<usize> {
    let config = settings::load_config(args.config.as_deref())?;
    let mut storage = settings::connect(args.database_url.as_deref())?;

    let csv_path = args
        .csv
        .clone()
        .unwrap_or_else(|| config.ingest.csv_path.clone());
    let table = args.table.clone().unwrap_or(config.tables.raw);

    IngestJob::new(table).run(&CsvDataset::new(csv_path), &mut storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use vigil_application::RunError;

    fn args(dir: &std::path::Path, csv: &str) -> LoadDataArgs {
        LoadDataArgs::parse_from([
            "load-data".to_string(),
            "--database-url".to_string(),
            format!("sqlite:///{}", dir.join("plant.db").display()),
            "--csv".to_string(),
            dir.join(csv).display().to_string(),
            "--table".to_string(),
            "machine_data_raw".to_string(),
        ])
    }

    #[test]
    fn loads_csv_rows() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("telemetry.csv"),
            "udi,product_id,machine_type\n1,M14860,M\n2,L47181,L\n",
        )
        .expect("write csv");

        let rows = run(&args(dir.path(), "telemetry.csv")).expect("ingest");
        assert_eq!(rows, 2);
    }

    #[test]
    fn absent_csv_is_missing_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = run(&args(dir.path(), "absent.csv")).unwrap_err();
        assert!(matches!(err, RunError::MissingInput(_)));
        assert!(err.to_string().contains("absent.csv"));
    }
}
