//! Input format detection by file extension.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Supported source file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Excel,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive).
    ///
    /// `.csv` is CSV; `.xlsx` and `.xls` are Excel. Anything else, including
    /// a missing extension, is [`IngestError::UnsupportedFormat`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xls" => Ok(Self::Excel),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}
