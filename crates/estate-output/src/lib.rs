//! Writers that persist processed listing datasets.
//!
//! The target format is picked from the file extension: `.parquet` writes
//! Parquet, anything else writes UTF-8 CSV prefixed with a byte-order mark
//! so spreadsheet tools detect the encoding.

mod error;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, ParquetWriter, SerWriter};
use tracing::info;

pub use error::{OutputError, Result};

/// UTF-8 byte-order mark written ahead of CSV output.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// On-disk layout for a written dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    /// Choose a format from the path extension. Unknown or missing
    /// extensions fall back to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("parquet") => Self::Parquet,
            _ => Self::Csv,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }
}

/// Write `df` to `path`, creating missing parent directories.
pub fn write_dataset(df: &DataFrame, path: &Path) -> Result<OutputFormat> {
    ensure_parent_dir(path)?;
    let format = OutputFormat::from_path(path);
    // Polars writers need a mutable frame for rechunking.
    let mut frame = df.clone();
    match format {
        OutputFormat::Csv => write_csv(&mut frame, path)?,
        OutputFormat::Parquet => write_parquet(&mut frame, path)?,
    }
    info!(
        path = %path.display(),
        format = format.as_str(),
        records = df.height(),
        "dataset written"
    );
    Ok(format)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(UTF8_BOM).map_err(io_err)?;
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(df)
        .map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)
}

fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ParquetWriter::new(file)
        .finish(df)
        .map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
