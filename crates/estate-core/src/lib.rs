//! ETL orchestration for real-estate listing datasets.
//!
//! [`EtlPipeline`] reads a CSV or Excel file, validates it, runs the
//! transform engine, validates the result again and writes it out.
//! Quality failures are logged and never stop the run; ordering misuse
//! and I/O failures surface as [`PipelineError`].

mod error;
pub mod pipeline;
pub mod statistics;

pub use error::{OrderingError, PipelineError, Result};
pub use pipeline::{EtlPipeline, REPORT_TIMESTAMP_FORMAT};
pub use statistics::{column_statistics, describe};

pub use estate_model::{SummaryReport, ValidationResult, Violation};
pub use estate_transform::TransformOptions;
