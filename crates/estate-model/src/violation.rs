//! Data-quality findings.
//!
//! The Violation enum provides type-safe finding creation where each variant
//! carries only its needed data. Violations are descriptive: they carry no
//! severity and never stop a pipeline run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A detected defect class with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// A critical column has missing values.
    NullValues { column: String, count: u64 },
    /// `precio` holds values below zero.
    NegativePrices { count: u64 },
    /// Records repeat an `id_propiedad` seen earlier in the dataset.
    DuplicateRecords { count: u64 },
}

impl Violation {
    /// Number of offending records.
    pub fn count(&self) -> u64 {
        match self {
            Violation::NullValues { count, .. } => *count,
            Violation::NegativePrices { count } => *count,
            Violation::DuplicateRecords { count } => *count,
        }
    }

    /// Column the finding refers to.
    pub fn column(&self) -> &str {
        match self {
            Violation::NullValues { column, .. } => column,
            Violation::NegativePrices { .. } => crate::columns::PRECIO,
            Violation::DuplicateRecords { .. } => crate::columns::ID_PROPIEDAD,
        }
    }

    /// Human-readable description, as shown in reports.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NullValues { column, count } => {
                write!(f, "Column '{column}': {count} null values found")
            }
            Violation::NegativePrices { count } => write!(f, "Negative prices found: {count}"),
            Violation::DuplicateRecords { count } => write!(f, "Duplicate records found: {count}"),
        }
    }
}

/// Interquartile-range bounds and the number of prices outside them.
///
/// Informational only: never part of a violation list and never affects
/// whether a validation pass succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: u64,
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `violations` is empty.
    pub passed: bool,
    pub violations: Vec<Violation>,
    /// Present when `precio` exists and has at least one numeric value.
    pub outliers: Option<OutlierSummary>,
}

impl ValidationResult {
    pub fn new(violations: Vec<Violation>, outliers: Option<OutlierSummary>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
            outliers,
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Violation descriptions in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }
}
