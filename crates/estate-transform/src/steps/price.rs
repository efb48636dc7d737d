//! Price cleanup and price-band labelling.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use estate_common::{any_to_string, column_f64_values, is_missing};
use estate_model::PriceCategory;
use estate_model::columns::{CATEGORIA_PRECIO, PRECIO};

use crate::error::Result;
use crate::normalization::clean_price;

/// Replace `precio` with its numeric form.
///
/// Every value is rendered as text and reduced to digits and `.`; values
/// that do not survive that become missing. Returns `false` when the column
/// is absent.
pub fn normalize_prices(df: &mut DataFrame) -> Result<bool> {
    let Ok(column) = df.column(PRECIO) else {
        return Ok(false);
    };
    let values: Vec<Option<f64>> = (0..df.height())
        .map(|idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if is_missing(&value) {
                None
            } else {
                clean_price(&any_to_string(value))
            }
        })
        .collect();
    df.with_column(Series::new(PRECIO.into(), values))?;
    Ok(true)
}

/// Append `categoria_precio` derived from the numeric `precio`.
pub fn categorize_prices(df: &mut DataFrame) -> Result<bool> {
    let Some(prices) = column_f64_values(df, PRECIO) else {
        return Ok(false);
    };
    let labels: Vec<&str> = prices
        .into_iter()
        .map(|price| PriceCategory::from_price(price).label())
        .collect();
    df.with_column(Series::new(CATEGORIA_PRECIO.into(), labels))?;
    Ok(true)
}
