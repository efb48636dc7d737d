//! Price outlier detection by the interquartile-range rule.
//!
//! Q1 and Q3 are linear-interpolated quantiles (see `estate_common::stats`).
//! A price is an outlier when it lies below `Q1 - 1.5 * IQR` or above
//! `Q3 + 1.5 * IQR`. Missing prices are ignored.

use polars::prelude::DataFrame;

use estate_common::column_f64_values;
use estate_common::stats::{quantile, sorted_values};
use estate_model::OutlierSummary;
use estate_model::columns::PRECIO;

const IQR_FACTOR: f64 = 1.5;

/// IQR outlier summary for `precio`, when the column has any numeric value.
pub fn check(df: &DataFrame) -> Option<OutlierSummary> {
    let prices: Vec<f64> = column_f64_values(df, PRECIO)?
        .into_iter()
        .flatten()
        .collect();
    price_outliers(&prices)
}

/// IQR outlier summary over a set of prices, `None` when empty.
///
/// # Examples
///
/// ```
/// use estate_validate::price_outliers;
///
/// let summary = price_outliers(&[10.0, 10.0, 10.0, 10.0, 100.0]).unwrap();
/// assert_eq!(summary.iqr, 0.0);
/// assert_eq!(summary.count, 1);
/// ```
pub fn price_outliers(prices: &[f64]) -> Option<OutlierSummary> {
    let sorted = sorted_values(prices);
    let q1 = quantile(&sorted, 0.25)?;
    let q3 = quantile(&sorted, 0.75)?;
    let iqr = q3 - q1;
    let lower_bound = q1 - IQR_FACTOR * iqr;
    let upper_bound = q3 + IQR_FACTOR * iqr;
    let count = sorted
        .iter()
        .filter(|price| **price < lower_bound || **price > upper_bound)
        .count() as u64;
    Some(OutlierSummary {
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        count,
    })
}
