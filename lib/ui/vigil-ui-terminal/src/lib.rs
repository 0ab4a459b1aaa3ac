//! Command-line entry points for the ingest and scoring jobs.

pub mod batch_score;
pub mod load_data;
mod logging;
mod settings;

use std::process::ExitCode;

use vigil_application::RunError;

/// Prints the failure and maps it to the process exit status.
fn report(err: RunError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}
