use std::fs;

use polars::prelude::{DataFrame, NamedFrom, ParquetReader, SerReader, Series};
use tempfile::tempdir;

use estate_ingest::read_dataset;
use estate_output::{OutputFormat, UTF8_BOM, write_dataset};

fn listings() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id_propiedad".into(), vec!["PROP-0001", "PROP-0002"]).into(),
        Series::new("precio".into(), vec![Some(150_000.0_f64), None]).into(),
        Series::new("comuna".into(), vec!["Ñuñoa", "Providencia"]).into(),
    ])
    .expect("frame")
}

#[test]
fn csv_starts_with_bom_and_creates_directories() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("processed").join("nested").join("out.csv");

    let format = write_dataset(&listings(), &path).expect("write");

    assert_eq!(format, OutputFormat::Csv);
    let bytes = fs::read(&path).expect("read back");
    assert!(bytes.starts_with(UTF8_BOM));
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf8");
    assert!(text.starts_with("id_propiedad,precio,comuna\n"));
    assert!(text.contains("Ñuñoa"));
}

#[test]
fn csv_output_reads_back_through_ingest() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("out.csv");
    write_dataset(&listings(), &path).expect("write");

    let df = read_dataset(&path).expect("read");

    assert_eq!(df.height(), 2);
    assert_eq!(
        df.get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>(),
        vec!["id_propiedad", "precio", "comuna"]
    );
}

#[test]
fn unknown_extension_falls_back_to_csv() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("out.dat");

    let format = write_dataset(&listings(), &path).expect("write");

    assert_eq!(format, OutputFormat::Csv);
    assert!(fs::read(&path).expect("read").starts_with(UTF8_BOM));
}

#[test]
fn parquet_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("out.parquet");
    let original = listings();

    let format = write_dataset(&original, &path).expect("write");
    assert_eq!(format, OutputFormat::Parquet);

    let file = fs::File::open(&path).expect("open");
    let restored = ParquetReader::new(file).finish().expect("read parquet");
    assert!(restored.equals_missing(&original));
}
