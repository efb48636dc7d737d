//! Cleaning and enrichment for listing datasets.
//!
//! [`transform_dataset`] produces a new frame from a source frame by running
//! [`TransformStep::ORDERED`] in sequence:
//!
//! 1. Text normalization over every string column
//! 2. `precio` reduced to a number
//! 3. `precio_m2`
//! 4. `categoria_precio`
//! 5. `fecha_publicacion` parsed, plus `antiguedad_dias`, `mes_publicacion`, `año_publicacion`
//! 6. `ratio_precio_superficie`
//! 7. Duplicate `id_propiedad` rows removed, first occurrence kept
//!
//! A step whose source columns are absent is skipped. Malformed values
//! become missing rather than failing the run.

pub mod error;
pub mod normalization;
pub mod options;
pub mod steps;

use polars::prelude::DataFrame;
use tracing::{debug, info};

pub use error::{Result, TransformError};
pub use options::TransformOptions;
pub use steps::TransformStep;

/// Run every transform step over a copy of `source`.
///
/// The source frame is left untouched.
pub fn transform_dataset(source: &DataFrame, options: &TransformOptions) -> Result<DataFrame> {
    info!(
        records = source.height(),
        reference_time = %options.reference_time,
        "transforming dataset"
    );
    let mut df = source.clone();
    for step in TransformStep::ORDERED {
        if step.apply(&mut df, options)? {
            debug!(step = step.name(), records = df.height(), "transform step applied");
        } else {
            debug!(step = step.name(), "transform step skipped, source column missing");
        }
    }
    info!(
        records = df.height(),
        columns = df.width(),
        "dataset transformed"
    );
    Ok(df)
}
