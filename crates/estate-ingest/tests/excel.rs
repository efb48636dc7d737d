//! Integration tests for workbook reading.
#![cfg(feature = "excel")]

use std::io::Write;
use std::path::PathBuf;

use estate_ingest::{IngestError, read_dataset};
use polars::prelude::*;
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn reads_first_worksheet_with_typed_columns() {
    let df = read_dataset(&fixture("propiedades.xlsx")).unwrap();

    assert_eq!(df.height(), 2);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "id_propiedad",
            "precio",
            "superficie_m2",
            "column_3",
            "fecha_publicacion",
            "tipo_propiedad",
        ]
    );

    let precio = df.column("precio").unwrap();
    assert_eq!(precio.dtype(), &DataType::Int64);
    assert_eq!(precio.i64().unwrap().get(1), Some(320_000));

    let area = df.column("superficie_m2").unwrap();
    assert_eq!(area.dtype(), &DataType::Float64);
    assert_eq!(area.f64().unwrap().get(0), Some(75.5));
    assert_eq!(area.null_count(), 1);

    let tipo = df.column("tipo_propiedad").unwrap();
    assert_eq!(tipo.dtype(), &DataType::String);
    assert_eq!(tipo.str().unwrap().get(0), Some("casa"));
    assert_eq!(tipo.null_count(), 1);
}

#[test]
fn date_cells_are_rendered_as_timestamps() {
    let df = read_dataset(&fixture("propiedades.xlsx")).unwrap();

    let fechas = df.column("fecha_publicacion").unwrap();
    assert_eq!(fechas.dtype(), &DataType::String);
    let fechas = fechas.str().unwrap();
    assert_eq!(fechas.get(0), Some("2024-01-15 00:00:00"));
    assert_eq!(fechas.get(1), Some("2024-01-20 12:00:00"));
}

#[test]
fn empty_worksheet_has_no_header() {
    let err = read_dataset(&fixture("empty_sheet.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::NoHeader { .. }));
}

#[test]
fn corrupt_workbook_is_reported() {
    let mut file = NamedTempFile::with_suffix(".xlsx").unwrap();
    write!(file, "id_propiedad,precio\nPROP-0001,150000\n").unwrap();

    let err = read_dataset(file.path()).unwrap_err();

    match err {
        IngestError::Workbook { path, message } => {
            assert_eq!(path, file.path());
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}
