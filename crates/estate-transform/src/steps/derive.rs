//! Price-per-area derivations.

use polars::prelude::{DataFrame, NamedFrom, Series};

use estate_common::column_f64_values;
use estate_model::columns::{PRECIO, SUPERFICIE_M2};

use crate::error::Result;

/// Price divided by area, or `None` when either is missing or the area is
/// not strictly positive.
pub fn price_per_area(price: Option<f64>, area: Option<f64>) -> Option<f64> {
    match (price, area) {
        (Some(price), Some(area)) if area > 0.0 => Some(price / area),
        _ => None,
    }
}

/// Append `target` as `precio / superficie_m2`, row by row.
///
/// Returns `false` without touching the frame when either source column is
/// absent.
pub fn append_price_per_area(df: &mut DataFrame, target: &str) -> Result<bool> {
    let (Some(prices), Some(areas)) = (
        column_f64_values(df, PRECIO),
        column_f64_values(df, SUPERFICIE_M2),
    ) else {
        return Ok(false);
    };
    let values: Vec<Option<f64>> = prices
        .into_iter()
        .zip(areas)
        .map(|(price, area)| price_per_area(price, area))
        .collect();
    df.with_column(Series::new(target.into(), values))?;
    Ok(true)
}
