//! Validation check modules.
//!
//! Each module performs a specific type of validation check.

mod critical;
mod duplicates;
mod negative;
pub mod outliers;

use polars::prelude::DataFrame;

use estate_model::ValidationResult;

/// Run all validation checks on a dataset.
pub fn run_all(df: &DataFrame) -> ValidationResult {
    let mut violations = Vec::new();

    // 1. Missing values in critical columns
    violations.extend(critical::check(df));

    // 2. Negative prices
    violations.extend(negative::check(df));

    // 3. IQR outliers (reported separately, not a violation)
    let outliers = outliers::check(df);

    // 4. Repeated identifiers
    violations.extend(duplicates::check(df));

    ValidationResult::new(violations, outliers)
}
