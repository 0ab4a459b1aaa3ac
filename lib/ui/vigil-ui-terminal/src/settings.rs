use std::path::{Path, PathBuf};

use vigil_adapter_storage::{DatabaseUrl, SqliteStorage};
use vigil_application::{RunError, RunResult};
use vigil_domain::VigilConfig;

pub(crate) const DATABASE_URL_VAR: &str = "DATABASE_URL";
const DEFAULT_CONFIG_FILE: &str = "vigil.yaml";

/// An explicit path must exist; the default file is optional.
pub(crate) fn load_config(explicit: Option<&Path>) -> RunResult<VigilConfig> {
    match config_path(explicit) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            VigilConfig::load_from_path(&path).map_err(RunError::InvalidConfiguration)
        }
        None => Ok(VigilConfig::default()),
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    fallback.is_file().then_some(fallback)
}

pub(crate) fn require_database_url(raw: Option<&str>) -> RunResult<&str> {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| RunError::MissingConfiguration(DATABASE_URL_VAR.into()))
}

pub(crate) fn connect(raw: Option<&str>) -> RunResult<SqliteStorage> {
    let raw = require_database_url(raw)?;
    DatabaseUrl::parse(raw)
        .and_then(|url| SqliteStorage::open(&url))
        .map_err(RunError::Connection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn blank_urls_count_as_missing() {
        for raw in [None, Some(""), Some("   ")] {
            let err = require_database_url(raw).unwrap_err();
            assert!(matches!(err, RunError::MissingConfiguration(_)));
            assert_eq!(err.to_string(), "DATABASE_URL not found");
        }
        assert_eq!(
            require_database_url(Some(" sqlite:///plant.db ")).expect("url"),
            "sqlite:///plant.db"
        );
    }

    #[test]
    fn unsupported_engines_fail_to_connect() {
        let err = connect(Some("mysql://root@localhost/plant")).err().expect("error");
        assert!(matches!(err, RunError::Connection(_)));
        assert!(err.to_string().contains("mysql"));
    }

    #[test]
    fn memory_databases_connect() {
        assert!(connect(Some("sqlite://")).is_ok());
    }

    #[test]
    fn explicit_config_files_are_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "tables:\n  predictions: nightly_scores").expect("write");
        let config = load_config(Some(file.path())).expect("config");
        assert_eq!(config.tables.predictions, "nightly_scores");
    }

    #[test]
    fn missing_explicit_config_is_invalid() {
        let err = load_config(Some(Path::new("/nonexistent/vigil.yaml"))).unwrap_err();
        assert!(matches!(err, RunError::InvalidConfiguration(_)));
    }
}
