//! Error types for listing data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is not one of the supported input formats.
    #[error("unsupported input format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte-order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; expected UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read an Excel workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook support was left out of this build.
    #[error("Excel support is disabled in this build: {path}")]
    ExcelDisabled { path: PathBuf },

    /// File has no header row.
    #[error("input file has no header row: {path}")]
    NoHeader { path: PathBuf },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
