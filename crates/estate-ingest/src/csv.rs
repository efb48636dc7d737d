//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable
    Ok(())
}

/// Field values read as missing, in addition to empty fields.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a UTF-8 CSV file with a single header row into a DataFrame.
///
/// Column types are inferred from the whole file. Empty fields and any of
/// [`MISSING_VALUE_TOKENS`] become nulls.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let null_values = NullValues::AllColumns(
        MISSING_VALUE_TOKENS
            .iter()
            .map(|token| PlSmallStr::from(*token))
            .collect(),
    );
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_basic() {
        let file = create_temp_csv(b"id_propiedad,precio\nPROP-0001,150000\nPROP-0002,\n");
        let df = read_csv(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("precio").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_csv_missing_value_tokens_are_null() {
        let file = create_temp_csv(
            b"id_propiedad,precio,tipo_propiedad\nA,NA,casa\nB,150000,N/A\nC,null,casa\n",
        );
        let df = read_csv(file.path()).unwrap();

        let precio = df.column("precio").unwrap();
        assert_eq!(precio.null_count(), 2);
        assert_eq!(precio.dtype(), &DataType::Int64);
        assert_eq!(df.column("tipo_propiedad").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_csv_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'a', 0x00]);
        let result = read_csv(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let result = read_csv(Path::new("/nonexistent/listings.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
