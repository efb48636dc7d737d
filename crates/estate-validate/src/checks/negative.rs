//! Negative price check.

use polars::prelude::DataFrame;

use estate_common::column_f64_values;
use estate_model::Violation;
use estate_model::columns::PRECIO;

/// Count prices below zero. Values that are not numbers are skipped.
pub fn check(df: &DataFrame) -> Option<Violation> {
    let prices = column_f64_values(df, PRECIO)?;
    let count = prices.iter().flatten().filter(|price| **price < 0.0).count() as u64;
    (count > 0).then_some(Violation::NegativePrices { count })
}
