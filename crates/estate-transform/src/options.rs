//! Options for a transform run.

use chrono::NaiveDateTime;

/// Inputs to the transform engine that do not come from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// The "now" that publication ages are measured against.
    pub reference_time: NaiveDateTime,
}

impl TransformOptions {
    pub fn new(reference_time: NaiveDateTime) -> Self {
        Self { reference_time }
    }
}
