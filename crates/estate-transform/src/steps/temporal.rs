//! Publication-date parsing and age enrichment.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series, TimeUnit};

use estate_common::{any_to_string, is_missing};
use estate_model::columns::{
    ANIO_PUBLICACION, ANTIGUEDAD_DIAS, FECHA_PUBLICACION, MES_PUBLICACION,
};

use crate::error::Result;
use crate::normalization::{parse_datetime, whole_days_between};

/// Layout used when writing parsed publication dates back to the frame.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse `fecha_publicacion` and append age, month and year columns.
///
/// Unparseable dates become missing and so do their derived fields. The
/// parsed timestamps replace the original column in [`TIMESTAMP_FORMAT`].
pub fn enrich_publication_dates(df: &mut DataFrame, reference: NaiveDateTime) -> Result<bool> {
    let Ok(column) = df.column(FECHA_PUBLICACION) else {
        return Ok(false);
    };
    let parsed: Vec<Option<NaiveDateTime>> = (0..df.height())
        .map(|idx| to_timestamp(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect();

    let formatted: Vec<Option<String>> = parsed
        .iter()
        .map(|ts| ts.map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()))
        .collect();
    let ages: Vec<Option<i64>> = parsed
        .iter()
        .map(|ts| ts.map(|ts| whole_days_between(ts, reference)))
        .collect();
    let months: Vec<Option<i32>> = parsed
        .iter()
        .map(|ts| ts.and_then(|ts| i32::try_from(ts.month()).ok()))
        .collect();
    let years: Vec<Option<i32>> = parsed.iter().map(|ts| ts.map(|ts| ts.year())).collect();

    df.with_column(Series::new(FECHA_PUBLICACION.into(), formatted))?;
    df.with_column(Series::new(ANTIGUEDAD_DIAS.into(), ages))?;
    df.with_column(Series::new(MES_PUBLICACION.into(), months))?;
    df.with_column(Series::new(ANIO_PUBLICACION.into(), years))?;
    Ok(true)
}

fn to_timestamp(value: AnyValue<'_>) -> Option<NaiveDateTime> {
    if is_missing(&value) {
        return None;
    }
    match value {
        AnyValue::Date(days) => NaiveDate::from_ymd_opt(1970, 1, 1)?
            .checked_add_signed(TimeDelta::try_days(i64::from(days))?)?
            .and_hms_opt(0, 0, 0),
        AnyValue::Datetime(raw, unit, _) => from_epoch(raw, unit),
        AnyValue::String(s) => parse_datetime(s),
        other => parse_datetime(&any_to_string(other)),
    }
}

fn from_epoch(raw: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let utc = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(raw)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(raw),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(raw),
    };
    utc.map(|ts| ts.naive_utc())
}
