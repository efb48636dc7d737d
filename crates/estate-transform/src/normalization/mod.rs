//! Value-level normalization rules shared by the transform steps.

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{parse_datetime, whole_days_between};
pub use numeric::clean_price;
pub use text::{normalize_text, title_case};
