use thiserror::Error;

use estate_ingest::IngestError;
use estate_output::OutputError;
use estate_transform::TransformError;

/// A pipeline stage was invoked before the stage it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("no data extracted; run extract before transform")]
    TransformBeforeExtract,
    #[error("no processed data; run transform before load")]
    LoadBeforeTransform,
    #[error("no processed data; run transform before building the summary report")]
    ReportBeforeTransform,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Ordering(#[from] OrderingError),
    #[error("{0}")]
    Ingest(#[from] IngestError),
    #[error("{0}")]
    Transform(#[from] TransformError),
    #[error("{0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
