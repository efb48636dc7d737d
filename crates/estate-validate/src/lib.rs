//! Data-quality validation for listing datasets.
//!
//! [`validate_dataset`] inspects a DataFrame snapshot and returns every
//! detected defect class. It never mutates its input and never fails:
//! findings are observability signals, not errors.
//!
//! Checks run independently, in this order:
//!
//! 1. Missing values in the critical columns (`id_propiedad`, `precio`, `tipo_propiedad`)
//! 2. Negative prices
//! 3. Price outliers by the 1.5 × IQR rule (informational, never a violation)
//! 4. Repeated `id_propiedad` values

mod checks;

use polars::prelude::DataFrame;
use tracing::{info, warn};

use estate_model::ValidationResult;

pub use checks::outliers::price_outliers;

/// Run all quality checks over the current state of `df`.
///
/// Calling it twice on the same data yields identical results; nothing is
/// cached between calls.
pub fn validate_dataset(df: &DataFrame) -> ValidationResult {
    info!(records = df.height(), "running data-quality checks");
    let result = checks::run_all(df);

    if let Some(outliers) = result.outliers.filter(|summary| summary.count > 0) {
        warn!(
            count = outliers.count,
            lower_bound = outliers.lower_bound,
            upper_bound = outliers.upper_bound,
            "possible price outliers detected"
        );
    }

    if result.passed {
        info!("all data-quality checks passed");
    } else {
        warn!(
            violation_count = result.violation_count(),
            "data-quality checks failed"
        );
        for violation in &result.violations {
            warn!(column = violation.column(), count = violation.count(), "{violation}");
        }
    }
    result
}
