//! Repeated identifier check.

use polars::prelude::DataFrame;

use estate_common::column_string_values;
use estate_common::keys::count_repeats;
use estate_model::Violation;
use estate_model::columns::ID_PROPIEDAD;

/// Count records whose `id_propiedad` already appeared in an earlier record.
///
/// The first occurrence of each id is not a duplicate.
pub fn check(df: &DataFrame) -> Option<Violation> {
    let ids = column_string_values(df, ID_PROPIEDAD)?;
    let count = count_repeats(&ids) as u64;
    (count > 0).then_some(Violation::DuplicateRecords { count })
}
