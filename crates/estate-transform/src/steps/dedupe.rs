//! Duplicate removal keyed on `id_propiedad`.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use estate_common::column_string_values;
use estate_common::keys::first_occurrence_mask;
use estate_model::columns::ID_PROPIEDAD;

use crate::error::Result;

/// Keep the first row for each `id_propiedad`, preserving order.
///
/// Missing identifiers count as equal to each other, so at most one row
/// with a missing id survives. Returns the number of rows dropped, or
/// `None` when the column is absent.
pub fn dedupe_by_id(df: &mut DataFrame) -> Result<Option<usize>> {
    let Some(ids) = column_string_values(df, ID_PROPIEDAD) else {
        return Ok(None);
    };
    let keep = first_occurrence_mask(&ids);
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped == 0 {
        return Ok(Some(0));
    }
    let mask = BooleanChunked::from_slice("dedupe_mask".into(), &keep);
    *df = df.filter(&mask)?;
    Ok(Some(dropped))
}
