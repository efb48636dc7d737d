//! The ordered transform steps.
//!
//! Later steps read columns written by earlier ones, so the order in
//! [`TransformStep::ORDERED`] is part of the output contract.

pub mod dedupe;
pub mod derive;
pub mod price;
pub mod temporal;
pub mod text;

use polars::prelude::DataFrame;
use tracing::debug;

use estate_model::columns::{PRECIO_M2, RATIO_PRECIO_SUPERFICIE};

use crate::error::Result;
use crate::options::TransformOptions;

/// One stage of the transform engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformStep {
    /// Trim and title-case every text column.
    NormalizeText,
    /// Reduce `precio` to a number.
    NormalizePrice,
    /// Append `precio_m2`.
    PricePerArea,
    /// Append `categoria_precio`.
    CategorizePrice,
    /// Parse `fecha_publicacion` and append its age, month and year.
    EnrichPublicationDate,
    /// Append `ratio_precio_superficie`.
    PriceAreaRatio,
    /// Drop repeated `id_propiedad` rows.
    DeduplicateIds,
}

impl TransformStep {
    pub const ORDERED: [TransformStep; 7] = [
        TransformStep::NormalizeText,
        TransformStep::NormalizePrice,
        TransformStep::PricePerArea,
        TransformStep::CategorizePrice,
        TransformStep::EnrichPublicationDate,
        TransformStep::PriceAreaRatio,
        TransformStep::DeduplicateIds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformStep::NormalizeText => "normalize_text",
            TransformStep::NormalizePrice => "normalize_price",
            TransformStep::PricePerArea => "price_per_area",
            TransformStep::CategorizePrice => "categorize_price",
            TransformStep::EnrichPublicationDate => "enrich_publication_date",
            TransformStep::PriceAreaRatio => "price_area_ratio",
            TransformStep::DeduplicateIds => "deduplicate_ids",
        }
    }

    /// Apply this step to `df`. Returns `false` when the step was skipped
    /// because a column it needs is absent.
    pub fn apply(self, df: &mut DataFrame, options: &TransformOptions) -> Result<bool> {
        let applied = match self {
            TransformStep::NormalizeText => {
                let columns = text::normalize_text_columns(df)?;
                debug!(columns, "normalized text columns");
                true
            }
            TransformStep::NormalizePrice => price::normalize_prices(df)?,
            TransformStep::PricePerArea => derive::append_price_per_area(df, PRECIO_M2)?,
            TransformStep::CategorizePrice => price::categorize_prices(df)?,
            TransformStep::EnrichPublicationDate => {
                temporal::enrich_publication_dates(df, options.reference_time)?
            }
            TransformStep::PriceAreaRatio => {
                derive::append_price_per_area(df, RATIO_PRECIO_SUPERFICIE)?
            }
            TransformStep::DeduplicateIds => match dedupe::dedupe_by_id(df)? {
                Some(dropped) => {
                    debug!(dropped, "removed duplicate listings");
                    true
                }
                None => false,
            },
        };
        Ok(applied)
    }
}

impl std::fmt::Display for TransformStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
