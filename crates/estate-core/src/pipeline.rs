//! The stateful extract → validate → transform → validate → load sequence.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDateTime;
use polars::prelude::DataFrame;
use tracing::{error, info, info_span, warn};

use estate_ingest::read_dataset;
use estate_model::{SummaryReport, ValidationResult};
use estate_output::{OutputFormat, write_dataset};
use estate_transform::{TransformOptions, transform_dataset};
use estate_validate::validate_dataset;

use crate::error::{OrderingError, Result};
use crate::statistics::describe;

/// Layout of the report's run timestamp.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ETL run over one input file.
///
/// The pipeline holds the raw frame, the processed frame and the most recent
/// validation result, each overwritten by the stage that produces it. It is
/// meant to process a single dataset at a time: every stage takes
/// `&mut self`, and sharing one instance across threads or datasets needs
/// external synchronization. Create a new pipeline per input instead.
#[derive(Debug)]
pub struct EtlPipeline {
    input: PathBuf,
    output: PathBuf,
    options: TransformOptions,
    include_statistics: bool,
    raw: Option<DataFrame>,
    processed: Option<DataFrame>,
    last_validation: Option<ValidationResult>,
}

impl EtlPipeline {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        options: TransformOptions,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options,
            include_statistics: true,
            raw: None,
            processed: None,
            last_validation: None,
        }
    }

    /// Whether [`run`](Self::run) attaches the numeric statistics digest.
    #[must_use]
    pub fn with_statistics(mut self, include: bool) -> Self {
        self.include_statistics = include;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn raw(&self) -> Option<&DataFrame> {
        self.raw.as_ref()
    }

    pub fn processed(&self) -> Option<&DataFrame> {
        self.processed.as_ref()
    }

    pub fn last_validation(&self) -> Option<&ValidationResult> {
        self.last_validation.as_ref()
    }

    /// Read the input file. Replaces any previously extracted data and
    /// discards earlier processed output and validation results.
    pub fn extract(&mut self) -> Result<&DataFrame> {
        let _span = info_span!("extract", path = %self.input.display()).entered();
        let df = read_dataset(&self.input)?;
        info!(
            records = df.height(),
            columns = df.width(),
            "data extracted"
        );
        self.processed = None;
        self.last_validation = None;
        Ok(self.raw.insert(df))
    }

    /// Validate `df` and remember the result as the latest one.
    ///
    /// Failed checks are logged, never raised.
    pub fn validate(&mut self, df: &DataFrame) -> ValidationResult {
        let _span = info_span!("validate").entered();
        let result = validate_dataset(df);
        self.last_validation = Some(result.clone());
        result
    }

    /// Build the processed frame from the extracted one.
    pub fn transform(&mut self) -> Result<&DataFrame> {
        let _span = info_span!("transform").entered();
        let raw = self.raw.as_ref().ok_or(OrderingError::TransformBeforeExtract)?;
        let processed = transform_dataset(raw, &self.options)?;
        Ok(self.processed.insert(processed))
    }

    /// Persist the processed frame to the output path.
    pub fn load(&self) -> Result<OutputFormat> {
        let _span = info_span!("load", path = %self.output.display()).entered();
        let processed = self
            .processed
            .as_ref()
            .ok_or(OrderingError::LoadBeforeTransform)?;
        Ok(write_dataset(processed, &self.output)?)
    }

    /// Snapshot the run: record counts, column count, the latest violation
    /// list and optionally a statistics digest of the processed frame.
    ///
    /// The digest is omitted when the processed frame has no numeric column.
    pub fn summary_report(
        &self,
        processed_at: NaiveDateTime,
        include_statistics: bool,
    ) -> Result<SummaryReport> {
        let processed = self
            .processed
            .as_ref()
            .ok_or(OrderingError::ReportBeforeTransform)?;
        let violations = self
            .last_validation
            .as_ref()
            .map(ValidationResult::messages)
            .unwrap_or_default();
        Ok(SummaryReport {
            processed_at: processed_at.format(REPORT_TIMESTAMP_FORMAT).to_string(),
            original_records: self.raw.as_ref().map_or(0, DataFrame::height),
            processed_records: processed.height(),
            columns: processed.width(),
            violation_count: violations.len(),
            violations,
            statistics: include_statistics
                .then(|| describe(processed))
                .filter(|stats| !stats.is_empty()),
        })
    }

    /// Run every stage in order and return the summary report.
    ///
    /// Any failure is logged and then returned unchanged.
    pub fn run(&mut self) -> Result<SummaryReport> {
        let start = Instant::now();
        info!(
            input = %self.input.display(),
            output = %self.output.display(),
            "starting ETL pipeline"
        );
        let report = self.run_stages().inspect_err(|err| {
            error!(error = %err, "ETL pipeline failed");
        })?;
        info!(
            original_records = report.original_records,
            processed_records = report.processed_records,
            violation_count = report.violation_count,
            duration_ms = start.elapsed().as_millis(),
            "ETL pipeline completed"
        );
        Ok(report)
    }

    fn run_stages(&mut self) -> Result<SummaryReport> {
        let raw = self.extract()?.clone();

        if !self.validate(&raw).passed {
            warn!("raw data failed quality checks; continuing");
        }

        let processed = self.transform()?.clone();

        if !self.validate(&processed).passed {
            warn!("processed data failed quality checks");
        }

        self.load()?;
        self.summary_report(self.options.reference_time, self.include_statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use chrono::NaiveDate;

    fn pipeline() -> EtlPipeline {
        let reference = NaiveDate::from_ymd_opt(2024, 2, 14)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("reference");
        EtlPipeline::new("in.csv", "out.csv", TransformOptions::new(reference))
    }

    #[test]
    fn transform_requires_extract() {
        let mut pipeline = pipeline();
        let err = pipeline.transform().expect_err("ordering");
        assert!(matches!(
            err,
            PipelineError::Ordering(OrderingError::TransformBeforeExtract)
        ));
    }

    #[test]
    fn load_requires_transform() {
        let err = pipeline().load().expect_err("ordering");
        assert!(matches!(
            err,
            PipelineError::Ordering(OrderingError::LoadBeforeTransform)
        ));
    }

    #[test]
    fn report_requires_transform() {
        let pipeline = pipeline();
        let err = pipeline
            .summary_report(pipeline.options().reference_time, false)
            .expect_err("ordering");
        assert!(matches!(
            err,
            PipelineError::Ordering(OrderingError::ReportBeforeTransform)
        ));
    }
}
