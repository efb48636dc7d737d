//! Missing-value check over the critical columns.

use polars::prelude::{AnyValue, DataFrame};

use estate_common::is_missing;
use estate_model::Violation;
use estate_model::columns::CRITICAL_COLUMNS;

/// Count missing values in each critical column that is present.
pub fn check(df: &DataFrame) -> Vec<Violation> {
    let mut violations = Vec::new();

    for name in CRITICAL_COLUMNS {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let count = (0..df.height())
            .filter(|&idx| is_missing(&column.get(idx).unwrap_or(AnyValue::Null)))
            .count() as u64;
        if count > 0 {
            violations.push(Violation::NullValues {
                column: name.to_string(),
                count,
            });
        }
    }

    violations
}
