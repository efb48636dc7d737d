//! Shared utilities for the listing ETL crates.
//!
//! This crate provides common helpers used across the workspace,
//! mostly for reading Polars values as plain Rust types where a missing
//! value is an explicit `None`.

pub mod keys;
pub mod stats;
pub mod values;

// Re-export commonly used functions at crate root for convenience
pub use values::{
    any_to_f64, any_to_string, column_f64_values, column_string_values, format_numeric,
    is_missing, parse_f64,
};
