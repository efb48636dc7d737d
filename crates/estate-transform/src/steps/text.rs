//! Whitespace and casing cleanup across every text column.

use polars::prelude::{DataFrame, DataType, NamedFrom, PlSmallStr, Series};

use crate::error::Result;
use crate::normalization::normalize_text;

/// Trim and title-case every string-typed column in place.
///
/// Missing values stay missing. Returns the number of columns rewritten.
pub fn normalize_text_columns(df: &mut DataFrame) -> Result<usize> {
    let names: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().clone())
        .collect();

    for name in &names {
        let values: Vec<Option<String>> = df
            .column(name.as_str())?
            .str()?
            .into_iter()
            .map(|value| value.map(normalize_text))
            .collect();
        df.with_column(Series::new(name.clone(), values))?;
    }
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_only_string_columns() {
        let mut df = DataFrame::new(vec![
            Series::new("tipo_propiedad".into(), vec![Some("  casa "), None]).into(),
            Series::new("superficie_m2".into(), vec![Some(80_i64), Some(120)]).into(),
        ])
        .expect("frame");

        let rewritten = normalize_text_columns(&mut df).expect("normalize");
        assert_eq!(rewritten, 1);

        let tipo = df.column("tipo_propiedad").expect("tipo").str().expect("str");
        assert_eq!(tipo.get(0), Some("Casa"));
        assert_eq!(tipo.get(1), None);
        assert_eq!(
            df.column("superficie_m2").expect("area").dtype(),
            &DataType::Int64
        );
    }
}
