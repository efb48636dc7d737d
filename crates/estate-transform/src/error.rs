use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while rebuilding dataset columns.
///
/// Malformed field values are never errors; they become missing values.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
