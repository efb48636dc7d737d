//! Listing data ingestion.
//!
//! Reads a source file into a Polars `DataFrame`, choosing the reader from
//! the file extension:
//!
//! - **CSV** (`.csv`): UTF-8, single header row, BOM tolerated
//! - **Excel** (`.xlsx`, `.xls`): first worksheet, requires the `excel` feature
//!
//! Any other extension fails with [`IngestError::UnsupportedFormat`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use estate_ingest::read_dataset;
//!
//! let df = read_dataset(Path::new("data/raw/propiedades_raw.csv"))?;
//! println!("{} records", df.height());
//! ```

mod csv;
#[cfg(feature = "excel")]
mod excel;
mod error;
mod format;

use std::path::Path;

use polars::prelude::DataFrame;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv::{MISSING_VALUE_TOKENS, read_csv, validate_encoding};
#[cfg(feature = "excel")]
pub use excel::read_excel;
pub use format::InputFormat;

/// Reads a source file, dispatching on its extension.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    let format = InputFormat::from_path(path)?;
    let df = match format {
        InputFormat::Csv => read_csv(path)?,
        InputFormat::Excel => read_workbook(path)?,
    };
    tracing::info!(
        path = %path.display(),
        records = df.height(),
        columns = df.width(),
        "dataset read"
    );
    Ok(df)
}

#[cfg(feature = "excel")]
fn read_workbook(path: &Path) -> Result<DataFrame> {
    read_excel(path)
}

#[cfg(not(feature = "excel"))]
fn read_workbook(path: &Path) -> Result<DataFrame> {
    Err(IngestError::ExcelDisabled {
        path: path.to_path_buf(),
    })
}
