use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};

/// Where a SQLite database lives, parsed from a `DATABASE_URL` style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    File(PathBuf),
    Memory,
}

impl DatabaseUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("database url is empty");
        }
        let without_query = trimmed.split('?').next().unwrap_or(trimmed);

        if matches!(without_query, "sqlite://" | "sqlite:///:memory:" | ":memory:") {
            return Ok(Self::Memory);
        }
        if let Some(path) = without_query
            .strip_prefix("sqlite:///")
            .or_else(|| without_query.strip_prefix("sqlite://"))
            .or_else(|| without_query.strip_prefix("sqlite:"))
            .or_else(|| without_query.strip_prefix("file:"))
        {
            if path.is_empty() {
                bail!("database url '{trimmed}' has no path");
            }
            return Ok(Self::File(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = without_query.split_once("://") {
            bail!("unsupported database scheme '{scheme}'; only sqlite is available");
        }
        Ok(Self::File(PathBuf::from(without_query)))
    }
}

impl FromStr for DatabaseUrl {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "sqlite:///{}", path.display()),
            Self::Memory => f.write_str("sqlite://"),
        }
    }
}
