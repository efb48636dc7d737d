pub mod category;
pub mod columns;
pub mod report;
pub mod violation;

pub use category::PriceCategory;
pub use report::{ColumnStatistics, SummaryReport};
pub use violation::{OutlierSummary, ValidationResult, Violation};
