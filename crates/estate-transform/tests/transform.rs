//! End-to-end behaviour of the transform engine.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{DataFrame, NamedFrom, Series};
use proptest::prelude::*;

use estate_common::{column_f64_values, column_string_values};
use estate_model::PriceCategory;
use estate_model::columns::{
    ANIO_PUBLICACION, ANTIGUEDAD_DIAS, CATEGORIA_PRECIO, FECHA_PUBLICACION, ID_PROPIEDAD,
    MES_PUBLICACION, PRECIO, PRECIO_M2, RATIO_PRECIO_SUPERFICIE, SUPERFICIE_M2, TIPO_PROPIEDAD,
};
use estate_transform::steps::dedupe::dedupe_by_id;
use estate_transform::{TransformOptions, TransformStep, transform_dataset};

fn options() -> TransformOptions {
    let reference: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 2, 14)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("reference time");
    TransformOptions::new(reference)
}

fn strings(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    column_string_values(df, name).expect("column present")
}

fn numbers(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    column_f64_values(df, name).expect("column present")
}

#[test]
fn duplicate_and_negative_scenario_keeps_first_occurrences() {
    let df = DataFrame::new(vec![
        Series::new(ID_PROPIEDAD.into(), vec!["A", "A", "B"]).into(),
        Series::new(PRECIO.into(), vec![50_000_i64, 50_000, -10]).into(),
        Series::new(TIPO_PROPIEDAD.into(), vec!["x", "x", "y"]).into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    assert_eq!(out.height(), 2);
    assert_eq!(
        strings(&out, ID_PROPIEDAD),
        vec![Some("A".to_string()), Some("B".to_string())]
    );
    assert_eq!(
        strings(&out, TIPO_PROPIEDAD),
        vec![Some("X".to_string()), Some("Y".to_string())]
    );
    // The sign is discarded along with every other non-digit character.
    assert_eq!(numbers(&out, PRECIO), vec![Some(50_000.0), Some(10.0)]);
    assert_eq!(df.height(), 3, "source frame must not change");
}

#[test]
fn zero_area_yields_missing_ratios() {
    let df = DataFrame::new(vec![
        Series::new(PRECIO.into(), vec![100_000_i64, 100_000]).into(),
        Series::new(SUPERFICIE_M2.into(), vec![0_i64, 50]).into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    assert_eq!(numbers(&out, PRECIO_M2), vec![None, Some(2_000.0)]);
    assert_eq!(numbers(&out, RATIO_PRECIO_SUPERFICIE), vec![None, Some(2_000.0)]);
}

#[test]
fn category_boundaries() {
    let df = DataFrame::new(vec![
        Series::new(
            PRECIO.into(),
            vec![
                Some("99999.99"),
                Some("100000"),
                Some("299999.99"),
                Some("300000"),
                Some("consultar"),
                None,
            ],
        )
        .into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    let labels: Vec<Option<String>> = strings(&out, CATEGORIA_PRECIO);
    let expected = ["Económico", "Medio", "Medio", "Premium", "No definido", "No definido"];
    assert_eq!(
        labels,
        expected.iter().map(|s| Some((*s).to_string())).collect::<Vec<_>>()
    );
}

#[test]
fn currency_text_is_cleaned_before_categorizing() {
    let df = DataFrame::new(vec![
        Series::new(PRECIO.into(), vec!["$1,500,000", " 85.000 "]).into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    assert_eq!(numbers(&out, PRECIO), vec![Some(1_500_000.0), Some(85.0)]);
    assert_eq!(
        strings(&out, CATEGORIA_PRECIO),
        vec![Some("Premium".to_string()), Some("Económico".to_string())]
    );
}

#[test]
fn temporal_columns_follow_the_reference_time() {
    let df = DataFrame::new(vec![
        Series::new(
            FECHA_PUBLICACION.into(),
            vec![Some("2024-01-15"), Some("2024-03-01"), Some("garbage"), None],
        )
        .into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    assert_eq!(
        numbers(&out, ANTIGUEDAD_DIAS),
        vec![Some(30.0), Some(-16.0), None, None]
    );
    assert_eq!(numbers(&out, MES_PUBLICACION), vec![Some(1.0), Some(3.0), None, None]);
    assert_eq!(
        numbers(&out, ANIO_PUBLICACION),
        vec![Some(2024.0), Some(2024.0), None, None]
    );
}

#[test]
fn absent_columns_skip_their_steps() {
    let df = DataFrame::new(vec![
        Series::new("descripcion".into(), vec![Some(" luminoso  y amplio"), None]).into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    assert_eq!(out.width(), 1);
    assert_eq!(
        strings(&out, "descripcion"),
        vec![Some("Luminoso  Y Amplio".to_string()), None]
    );
}

#[test]
fn output_column_order() {
    let df = DataFrame::new(vec![
        Series::new(ID_PROPIEDAD.into(), vec!["P1"]).into(),
        Series::new(PRECIO.into(), vec![150_000_i64]).into(),
        Series::new(TIPO_PROPIEDAD.into(), vec!["casa"]).into(),
        Series::new(SUPERFICIE_M2.into(), vec![75_i64]).into(),
        Series::new(FECHA_PUBLICACION.into(), vec!["2024-01-15"]).into(),
    ])
    .expect("frame");

    let out = transform_dataset(&df, &options()).expect("transform");

    let names: Vec<&str> = out
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            ID_PROPIEDAD,
            PRECIO,
            TIPO_PROPIEDAD,
            SUPERFICIE_M2,
            FECHA_PUBLICACION,
            PRECIO_M2,
            CATEGORIA_PRECIO,
            ANTIGUEDAD_DIAS,
            MES_PUBLICACION,
            ANIO_PUBLICACION,
            RATIO_PRECIO_SUPERFICIE,
        ]
    );
}

#[test]
fn missing_ids_collapse_to_one_row() {
    let mut df = DataFrame::new(vec![
        Series::new(ID_PROPIEDAD.into(), vec![None, Some("A"), None]).into(),
    ])
    .expect("frame");

    let dropped = dedupe_by_id(&mut df).expect("dedupe");

    assert_eq!(dropped, Some(1));
    assert_eq!(strings(&df, ID_PROPIEDAD), vec![None, Some("A".to_string())]);
}

#[test]
fn steps_run_in_dependency_order() {
    let names: Vec<&str> = TransformStep::ORDERED.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec![
            "normalize_text",
            "normalize_price",
            "price_per_area",
            "categorize_price",
            "enrich_publication_date",
            "price_area_ratio",
            "deduplicate_ids",
        ]
    );
}

proptest! {
    #[test]
    fn dedupe_is_idempotent(ids in proptest::collection::vec(proptest::option::of(0u8..6), 0..40)) {
        let ids: Vec<Option<String>> = ids
            .into_iter()
            .map(|id| id.map(|v| v.to_string()))
            .collect();
        let mut once = DataFrame::new(vec![Series::new(ID_PROPIEDAD.into(), ids).into()])
            .expect("frame");
        dedupe_by_id(&mut once).expect("first pass");
        let mut twice = once.clone();
        let dropped = dedupe_by_id(&mut twice).expect("second pass");

        prop_assert_eq!(dropped, Some(0));
        prop_assert!(once.equals_missing(&twice));
    }

    #[test]
    fn categories_partition_the_price_domain(price in proptest::option::of(0.0f64..1_000_000.0)) {
        let category = PriceCategory::from_price(price);
        let matches = [
            price.is_some_and(|p| p < 100_000.0),
            price.is_some_and(|p| (100_000.0..300_000.0).contains(&p)),
            price.is_some_and(|p| p >= 300_000.0),
        ];
        prop_assert_eq!(matches.iter().filter(|m| **m).count(), usize::from(price.is_some()));
        match category {
            PriceCategory::Economico => prop_assert!(matches[0]),
            PriceCategory::Medio => prop_assert!(matches[1]),
            PriceCategory::Premium => prop_assert!(matches[2]),
            PriceCategory::NoDefinido => prop_assert!(price.is_none()),
        }
    }
}
