//! Run settings from an optional TOML file merged with CLI flags.
//!
//! ```toml
//! input = "data/raw/propiedades_raw.csv"
//! output = "data/processed/propiedades_procesadas.parquet"
//! statistics = true
//! reference_time = "2024-06-30 00:00:00"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use estate_transform::normalization::parse_datetime;

pub const DEFAULT_INPUT: &str = "data/raw/propiedades_raw.csv";
pub const DEFAULT_OUTPUT: &str = "data/processed/propiedades_procesadas.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unrecognized reference time '{value}'")]
    ReferenceTime { value: String },
}

/// Settings as written in the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub statistics: Option<bool>,
    pub reference_time: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line; `None` defers to the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub reference_time: Option<String>,
    pub no_statistics: bool,
}

/// Fully resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub statistics: bool,
    pub reference_time: NaiveDateTime,
}

impl RunConfig {
    /// Merge flags over file values over defaults. `now` is used when no
    /// reference time is given anywhere.
    pub fn resolve(
        file: FileConfig,
        overrides: CliOverrides,
        now: NaiveDateTime,
    ) -> Result<Self, ConfigError> {
        let reference_time = match overrides.reference_time.or(file.reference_time) {
            Some(value) => parse_reference_time(&value)?,
            None => now,
        };
        Ok(Self {
            input: overrides
                .input
                .or(file.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            statistics: !overrides.no_statistics && file.statistics.unwrap_or(true),
            reference_time,
        })
    }
}

/// Parse a user-supplied timestamp with the same rules as publication dates.
pub fn parse_reference_time(value: &str) -> Result<NaiveDateTime, ConfigError> {
    parse_datetime(value).ok_or_else(|| ConfigError::ReferenceTime {
        value: value.to_string(),
    })
}
