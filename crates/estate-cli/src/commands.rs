use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{info, info_span};

use estate_cli::config::{CliOverrides, FileConfig, RunConfig, parse_reference_time};
use estate_cli::sample::{SampleOptions, generate_listings};
use estate_core::{EtlPipeline, SummaryReport, TransformOptions};
use estate_ingest::read_dataset;
use estate_model::ValidationResult;
use estate_output::write_dataset;
use estate_validate::validate_dataset;

use crate::cli::{RunArgs, SampleArgs, ValidateArgs};

pub fn run_pipeline(args: &RunArgs) -> Result<SummaryReport> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let overrides = CliOverrides {
        input: args.input.clone(),
        output: args.output.clone(),
        reference_time: args.reference_time.clone(),
        no_statistics: args.no_statistics,
    };
    let config = RunConfig::resolve(file_config, overrides, local_now())?;

    let mut pipeline = EtlPipeline::new(
        &config.input,
        &config.output,
        TransformOptions::new(config.reference_time),
    )
    .with_statistics(config.statistics);
    pipeline
        .run()
        .with_context(|| format!("process {}", config.input.display()))
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationResult> {
    let span = info_span!("validate", path = %args.file.display());
    let _guard = span.enter();
    let df = read_dataset(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    Ok(validate_dataset(&df))
}

pub fn run_sample(args: &SampleArgs) -> Result<PathBuf> {
    let start = Instant::now();
    let reference_time = match &args.reference_time {
        Some(value) => parse_reference_time(value)?,
        None => local_now(),
    };
    let options = SampleOptions {
        records: args.records,
        seed: args.seed,
        reference_time,
    };
    let df = generate_listings(&options).context("generate sample listings")?;
    write_dataset(&df, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        records = df.height(),
        path = %args.output.display(),
        duration_ms = start.elapsed().as_millis(),
        "sample data generated"
    );
    Ok(args.output.clone())
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
