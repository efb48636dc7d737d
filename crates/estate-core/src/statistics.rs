//! Numeric column digest for the summary report.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use estate_common::column_f64_values;
use estate_common::stats::{mean, quantile, sample_std, sorted_values};
use estate_model::ColumnStatistics;

/// Describe every numeric column of `df`, keyed by column name.
///
/// Text columns are ignored, as are missing values inside numeric ones.
pub fn describe(df: &DataFrame) -> BTreeMap<String, ColumnStatistics> {
    df.get_columns()
        .iter()
        .filter(|column| column.dtype().is_numeric())
        .filter_map(|column| {
            let name = column.name().as_str();
            let values: Vec<f64> = column_f64_values(df, name)?.into_iter().flatten().collect();
            Some((name.to_string(), column_statistics(&values)))
        })
        .collect()
}

/// Statistics of a set of present values.
pub fn column_statistics(values: &[f64]) -> ColumnStatistics {
    let sorted = sorted_values(values);
    ColumnStatistics {
        count: sorted.len() as u64,
        mean: mean(&sorted),
        std: sample_std(&sorted),
        min: sorted.first().copied(),
        p25: quantile(&sorted, 0.25),
        p50: quantile(&sorted, 0.5),
        p75: quantile(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}
