use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vigil_adapter_models::FileArtifactStore;
use vigil_application::{RunResult, ScoringJob};
use vigil_domain::ScoringSummary;

use crate::{logging, report, settings};

/// Score every telemetry row with the failure classifier and the temperature
/// regressor, then replace the predictions table.
#[derive(Debug, Parser)]
#[command(name = "batch-score", version)]
pub struct BatchScoreArgs {
    /// Database connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "VIGIL_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding xgb_classifier.json, rf_regressor.json and label_encoder.json
    #[arg(long)]
    pub models_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Binary entry point.
pub fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = BatchScoreArgs::parse();
    logging::init(args.verbose);
    match run(&args) {
        Ok(summary) => {
            println!("{}", summary_line(&summary));
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

pub fn run(args: &BatchScoreArgs) -> RunResult<ScoringSummary> {
    let mut config = settings::load_config(args.config.as_deref())?;
    if let Some(dir) = &args.models_dir {
        config.models.classifier_path = dir.join("xgb_classifier.json");
        config.models.regressor_path = dir.join("rf_regressor.json");
        config.models.vocabulary_path = dir.join("label_encoder.json");
    }
    let mut storage = settings::connect(args.database_url.as_deref())?;
    let artifacts = FileArtifactStore::new(config.models);

    ScoringJob::new(config.tables).run(&artifacts, &mut storage)
}

fn summary_line(summary: &ScoringSummary) -> String {
    let mean = summary
        .mean_anomaly_score
        .map_or_else(|| "n/a".to_string(), |mean| format!("{mean:.3}"));
    format!(
        "Scored {} rows: {} high risk, mean temperature anomaly {}.",
        summary.rows, summary.high_risk, mean
    )
}
