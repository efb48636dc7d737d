//! Run summary handed to the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive statistics of one numeric column. Missing values are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub count: u64,
    pub mean: Option<f64>,
    /// Sample standard deviation; undefined below two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// Snapshot of a finished run. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Local run time, `%Y-%m-%d %H:%M:%S`.
    #[serde(rename = "fecha_procesamiento")]
    pub processed_at: String,
    #[serde(rename = "registros_originales")]
    pub original_records: usize,
    #[serde(rename = "registros_procesados")]
    pub processed_records: usize,
    #[serde(rename = "columnas")]
    pub columns: usize,
    #[serde(rename = "validaciones_fallidas")]
    pub violation_count: usize,
    #[serde(rename = "errores")]
    pub violations: Vec<String>,
    /// Per numeric column, keyed by column name.
    #[serde(
        rename = "estadisticas",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub statistics: Option<BTreeMap<String, ColumnStatistics>>,
}

impl SummaryReport {
    /// Key/value lines for plain-text display. The statistics block is left out.
    pub fn plain_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fecha_procesamiento", self.processed_at.clone()),
            ("registros_originales", self.original_records.to_string()),
            ("registros_procesados", self.processed_records.to_string()),
            ("columnas", self.columns.to_string()),
            ("validaciones_fallidas", self.violation_count.to_string()),
            ("errores", format!("{:?}", self.violations)),
        ]
    }
}
