//! Parquet codecs for hourly and daily series.
//!
//! A series file is one row per sample with explicit calendar columns:
//! `year`, `day_of_year`, and (hourly only) `hour`, plus a `value` column.
//! Rows must form a contiguous grid; the reader reconstructs the implied
//! grid and rejects the first gap or disorder it finds. Variable and units
//! metadata ride along in the Arrow schema metadata.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, AsArray, Float64Array, Int32Array, RecordBatch, UInt8Array, UInt16Array,
};
use arrow::datatypes::{DataType, Field, Float64Type, Int32Type, Schema, UInt8Type, UInt16Type};
use helios_calendar::{Doy, HourStamp, NoLeapDate};
use helios_series::{DailySeries, HourlySeries};
use tracing::debug;

use crate::batches::{read_batches, validate_columns, write_batches};
use crate::error::IoError;

/// Expected column names for an hourly series file.
const HOURLY_COLUMNS: [&str; 4] = ["year", "day_of_year", "hour", "value"];

/// Expected column names for a daily series file.
const DAILY_COLUMNS: [&str; 3] = ["year", "day_of_year", "value"];

/// Schema metadata key holding the variable name.
const VARIABLE_KEY: &str = "variable";

/// Schema metadata key holding the physical units.
const UNITS_KEY: &str = "units";

/// Descriptive metadata carried through series round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesMeta {
    /// Variable name, e.g. `"tas"`.
    pub variable: String,
    /// Physical units, e.g. `"K"`.
    pub units: String,
}

impl SeriesMeta {
    /// Creates metadata from a variable name and units.
    pub fn new(variable: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            units: units.into(),
        }
    }

    fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            (VARIABLE_KEY.to_string(), self.variable.clone()),
            (UNITS_KEY.to_string(), self.units.clone()),
        ])
    }

    fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            variable: map.get(VARIABLE_KEY).cloned().unwrap_or_default(),
            units: map.get(UNITS_KEY).cloned().unwrap_or_default(),
        }
    }
}

fn hourly_schema(meta: &SeriesMeta) -> Schema {
    Schema::new_with_metadata(
        vec![
            Field::new("year", DataType::Int32, false),
            Field::new("day_of_year", DataType::UInt16, false),
            Field::new("hour", DataType::UInt8, false),
            Field::new("value", DataType::Float64, false),
        ],
        meta.to_map(),
    )
}

fn daily_schema(meta: &SeriesMeta) -> Schema {
    Schema::new_with_metadata(
        vec![
            Field::new("year", DataType::Int32, false),
            Field::new("day_of_year", DataType::UInt16, false),
            Field::new("value", DataType::Float64, false),
        ],
        meta.to_map(),
    )
}

/// Writes an hourly series to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if the file cannot be written.
pub fn write_hourly(path: &Path, series: &HourlySeries, meta: &SeriesMeta) -> Result<(), IoError> {
    let n = series.len();
    let mut years = Vec::with_capacity(n);
    let mut doys = Vec::with_capacity(n);
    let mut hours = Vec::with_capacity(n);
    for (stamp, _) in series.iter() {
        years.push(stamp.date().year());
        doys.push(stamp.date().doy().get());
        hours.push(stamp.hour());
    }

    let schema = hourly_schema(meta);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(years)),
        Arc::new(UInt16Array::from(doys)),
        Arc::new(UInt8Array::from(hours)),
        Arc::new(Float64Array::from(series.values().to_vec())),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;

    write_batches(path, &[batch], &schema)?;
    debug!(path = %path.display(), n_hours = n, "hourly series written");
    Ok(())
}

/// Reads an hourly series and its metadata from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Parquet`] if the file
/// cannot be read, or [`IoError::Validation`] if the columns do not match
/// the hourly layout, a row carries an invalid calendar position, or the
/// rows do not form a contiguous hourly grid.
pub fn read_hourly(path: &Path) -> Result<(HourlySeries, SeriesMeta), IoError> {
    let batches = read_batches(path)?;
    let Some(first) = batches.first() else {
        return Err(IoError::Validation {
            count: 1,
            details: "file contains no rows".to_string(),
        });
    };
    validate_columns(first, &HOURLY_COLUMNS)?;
    let meta = SeriesMeta::from_map(first.schema().metadata());

    let mut start: Option<HourStamp> = None;
    let mut expected: Option<HourStamp> = None;
    let mut values = Vec::new();
    let mut row = 0usize;

    for batch in &batches {
        let year_col = batch.column(0).as_primitive::<Int32Type>();
        let doy_col = batch.column(1).as_primitive::<UInt16Type>();
        let hour_col = batch.column(2).as_primitive::<UInt8Type>();
        let value_col = batch.column(3).as_primitive::<Float64Type>();

        for i in 0..batch.num_rows() {
            let doy = Doy::new(doy_col.value(i)).map_err(|e| IoError::Validation {
                count: 1,
                details: format!("row {row}: {e}"),
            })?;
            let date = NoLeapDate::from_year_doy(year_col.value(i), doy);
            let stamp = HourStamp::new(date, hour_col.value(i)).map_err(|e| IoError::Validation {
                count: 1,
                details: format!("row {row}: {e}"),
            })?;

            match expected {
                None => start = Some(stamp),
                Some(want) if want != stamp => {
                    return Err(IoError::Validation {
                        count: 1,
                        details: format!("row {row}: expected stamp {want}, got {stamp}"),
                    });
                }
                Some(_) => {}
            }
            expected = Some(stamp.plus_hours(1));
            values.push(value_col.value(i));
            row += 1;
        }
    }

    let start = start.ok_or_else(|| IoError::Validation {
        count: 1,
        details: "file contains no rows".to_string(),
    })?;
    let series = HourlySeries::new(start, values).map_err(|e| IoError::Series {
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), n_hours = series.len(), "hourly series read");
    Ok((series, meta))
}

/// Writes a daily series to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if the file cannot be written.
pub fn write_daily(path: &Path, series: &DailySeries, meta: &SeriesMeta) -> Result<(), IoError> {
    let n = series.len();
    let mut years = Vec::with_capacity(n);
    let mut doys = Vec::with_capacity(n);
    for (date, _) in series.iter() {
        years.push(date.year());
        doys.push(date.doy().get());
    }

    let schema = daily_schema(meta);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(years)),
        Arc::new(UInt16Array::from(doys)),
        Arc::new(Float64Array::from(series.values().to_vec())),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;

    write_batches(path, &[batch], &schema)?;
    debug!(path = %path.display(), n_days = n, "daily series written");
    Ok(())
}

/// Reads a daily series and its metadata from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Parquet`] if the file
/// cannot be read, or [`IoError::Validation`] if the columns do not match
/// the daily layout, a row carries an invalid day-of-year, or the rows do
/// not form a contiguous daily grid.
pub fn read_daily(path: &Path) -> Result<(DailySeries, SeriesMeta), IoError> {
    let batches = read_batches(path)?;
    let Some(first) = batches.first() else {
        return Err(IoError::Validation {
            count: 1,
            details: "file contains no rows".to_string(),
        });
    };
    validate_columns(first, &DAILY_COLUMNS)?;
    let meta = SeriesMeta::from_map(first.schema().metadata());

    let mut start: Option<NoLeapDate> = None;
    let mut expected: Option<NoLeapDate> = None;
    let mut values = Vec::new();
    let mut row = 0usize;

    for batch in &batches {
        let year_col = batch.column(0).as_primitive::<Int32Type>();
        let doy_col = batch.column(1).as_primitive::<UInt16Type>();
        let value_col = batch.column(2).as_primitive::<Float64Type>();

        for i in 0..batch.num_rows() {
            let doy = Doy::new(doy_col.value(i)).map_err(|e| IoError::Validation {
                count: 1,
                details: format!("row {row}: {e}"),
            })?;
            let date = NoLeapDate::from_year_doy(year_col.value(i), doy);

            match expected {
                None => start = Some(date),
                Some(want) if want != date => {
                    return Err(IoError::Validation {
                        count: 1,
                        details: format!("row {row}: expected date {want}, got {date}"),
                    });
                }
                Some(_) => {}
            }
            expected = Some(date.next());
            values.push(value_col.value(i));
            row += 1;
        }
    }

    let start = start.ok_or_else(|| IoError::Validation {
        count: 1,
        details: "file contains no rows".to_string(),
    })?;
    let series = DailySeries::new(start, values).map_err(|e| IoError::Series {
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), n_days = series.len(), "daily series read");
    Ok((series, meta))
}
