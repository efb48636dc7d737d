//! Excel workbook reading (first worksheet only).

use std::path::Path;

use calamine::{Data, DataType as _, Reader, open_workbook_auto};
use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Reads the first worksheet of an `.xlsx`/`.xls` workbook into a DataFrame.
///
/// The first row holds column names. A column whose populated cells are all
/// whole numbers becomes `Int64`, all numeric becomes `Float64`, anything
/// else becomes text. Date cells are rendered as `%Y-%m-%d %H:%M:%S`.
pub fn read_excel(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| workbook_error("workbook has no worksheets".to_string()))?
        .map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    };
    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Data::Empty => format!("column_{idx}"),
            other => other.to_string().trim().to_string(),
        })
        .collect();

    let body: Vec<&[Data]> = rows.collect();
    let mut columns = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let cells: Vec<&Data> = body
            .iter()
            .map(|row| row.get(idx).unwrap_or(&Data::Empty))
            .collect();
        columns.push(build_series(name, &cells).into_column());
    }

    let df = DataFrame::new(columns)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "workbook loaded"
    );
    Ok(df)
}

fn build_series(name: &str, cells: &[&Data]) -> Series {
    let populated = || cells.iter().filter(|cell| !matches!(cell, Data::Empty));

    let all_whole = populated().all(|cell| match cell {
        Data::Int(_) => true,
        Data::Float(v) => v.fract() == 0.0 && v.abs() < i64::MAX as f64,
        _ => false,
    });
    if all_whole {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Int(v) => Some(*v),
                Data::Float(v) => Some(*v as i64),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    let all_numeric = populated().all(|cell| matches!(cell, Data::Int(_) | Data::Float(_)));
    if all_numeric {
        let values: Vec<Option<f64>> = cells.iter().map(|cell| cell.as_f64()).collect();
        return Series::new(name.into(), values);
    }

    let values: Vec<Option<String>> = cells.iter().map(|cell| cell_text(cell)).collect();
    Series::new(name.into(), values)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        other => Some(other.to_string()),
    }
}
